//! Extractor invocations (probe and link resolution)

use crate::domain::model::Invocation;

/// Output template asking the extractor for one JSON record per video
const PROBE_TEMPLATE: &str =
    "%(.{formats_table,duration_string,title,fulltitle,is_live,live_status})+j";

/// Builds extractor command lines
#[derive(Debug, Clone)]
pub struct ExtractorPlanner {
    program: String,
}

impl ExtractorPlanner {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Executable the invocations run
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Single-line JSON metadata for `source`
    pub fn probe(&self, source: &str) -> Invocation {
        Invocation::new(&self.program)
            .arg(source)
            .args(["--encoding", "utf-8", "--print", PROBE_TEMPLATE])
    }

    /// Direct media URLs, one per line, for the tracks matching `selector`
    pub fn resolve(&self, source: &str, selector: &str) -> Invocation {
        Invocation::new(&self.program)
            .args(["-q", "--get-url", "--newline"])
            .arg(source)
            .args(["-f", selector])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_invocation() {
        let planner = ExtractorPlanner::new("/opt/yt-dlp");
        let invocation = planner.probe("https://example.com/watch?v=1");

        assert_eq!(invocation.program, "/opt/yt-dlp");
        assert_eq!(
            invocation.args,
            vec![
                "https://example.com/watch?v=1",
                "--encoding",
                "utf-8",
                "--print",
                "%(.{formats_table,duration_string,title,fulltitle,is_live,live_status})+j",
            ]
        );
    }

    #[test]
    fn test_resolve_passes_selector_verbatim() {
        let planner = ExtractorPlanner::new("yt-dlp");
        let invocation = planner.resolve("https://example.com/v", "bestvideo[height<=720]+bestaudio");

        assert_eq!(
            invocation.args,
            vec![
                "-q",
                "--get-url",
                "--newline",
                "https://example.com/v",
                "-f",
                "bestvideo[height<=720]+bestaudio",
            ]
        );
    }
}
