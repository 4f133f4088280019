// Unit tests for the grab pipeline

use std::path::MAIN_SEPARATOR;

use super::*;
use crate::app::testing::{ScriptedConsole, ScriptedProcess};
use crate::planner::ExtractorPlanner;
use crate::ports::CapturedOutput;

const PROBE_JSON: &str = r#"{"formats_table":"137 mp4 1920x1080\n140 m4a audio only","duration_string":"4:32","title":"My: Video?!","fulltitle":"My: Video?! (full)","is_live":false,"live_status":"not_live"}"#;

fn ok(stdout: &str) -> CapturedOutput {
    CapturedOutput {
        exit_code: Some(0),
        stdout: stdout.to_string(),
        stderr: String::new(),
    }
}

fn two_track_outputs() -> Vec<CapturedOutput> {
    vec![ok(PROBE_JSON), ok("http://a\nhttp://b\n")]
}

fn interactor(
    console: Arc<ScriptedConsole>,
    process: Arc<ScriptedProcess>,
    default_destination: &str,
) -> GrabInteractor {
    let extractor = ExtractorPlanner::new("yt-dlp");
    GrabInteractor::new(
        console,
        process.clone(),
        Arc::new(MetadataInteractor::new(process.clone(), extractor.clone())),
        Arc::new(LinksInteractor::new(process, extractor)),
        MuxPlanner::new("ffmpeg"),
        StageContext {
            default_destination: default_destination.to_string(),
        },
    )
}

#[test]
fn test_stage_order() {
    let stages = plan_stages(&GrabRequest::default());
    let names: Vec<String> = stages
        .iter()
        .map(|stage| match stage {
            Stage::Ask(step) => step.label.to_string(),
            other => format!("{:?}", other),
        })
        .collect();

    assert_eq!(
        names,
        vec![
            "Please, input URL",
            "Probe",
            "Input wanted format",
            "ResolveLinks",
            "Video codec",
            "Audio codec",
            "AskTrim",
            "Output filename",
            "Download to",
        ]
    );
}

#[test]
fn test_codec_stage_is_optional() {
    let labels_for = |skip_codecs: bool| -> Vec<&'static str> {
        plan_stages(&GrabRequest {
            source: Some("https://example.com/v".to_string()),
            skip_codecs,
            dry_run: false,
        })
        .iter()
        .filter_map(|stage| match stage {
            Stage::Ask(step) => Some(step.label),
            _ => None,
        })
        .collect()
    };

    assert_eq!(
        labels_for(false),
        vec![
            "Input wanted format",
            "Video codec",
            "Audio codec",
            "Output filename",
            "Download to",
        ]
    );
    assert_eq!(
        labels_for(true),
        vec!["Input wanted format", "Output filename", "Download to"]
    );
}

#[test]
fn test_default_request_asks_for_codecs() {
    let request = GrabRequest::default();
    assert!(!request.skip_codecs);
    assert!(plan_stages(&request)
        .iter()
        .any(|stage| matches!(stage, Stage::Ask(step) if step.label == "Video codec")));
}

#[tokio::test]
async fn test_all_defaults() {
    let console = Arc::new(ScriptedConsole::new(&["https://example.com/v"]));
    let process = Arc::new(ScriptedProcess::new(two_track_outputs()));

    let report = interactor(console.clone(), process.clone(), "")
        .execute(GrabRequest::default())
        .await
        .unwrap();

    assert!(report.executed);
    assert_eq!(report.output_path, "My Video.mp4");
    assert!(report.session.trim.is_none());

    let captured = process.captured_calls();
    assert_eq!(captured.len(), 2);
    assert_eq!(captured[1].args[4..], ["-f", "137+140"]);

    let forwarded = process.forwarded_calls();
    assert_eq!(forwarded.len(), 1);
    assert_eq!(forwarded[0].program, "ffmpeg");
    assert_eq!(
        forwarded[0].args,
        vec!["-i", "http://a", "-i", "http://b", "-c", "copy", "-y", "My Video.mp4"]
    );

    let transcript = console.transcript();
    assert!(transcript.contains(&"Input wanted format [137+140]: ".to_string()));
    assert!(transcript.contains(&"Video codec [copy]: ".to_string()));
    assert!(transcript.contains(&"Audio codec [copy]: ".to_string()));
    assert!(transcript.contains(&"Input IN (HH:MM:SS) [00:00:00]: ".to_string()));
    assert!(transcript.contains(&"Input OUT (HH:MM:SS) [00:04:32]: ".to_string()));
    assert!(transcript.contains(&"Output filename [My Video.mp4]: ".to_string()));
    assert!(transcript.contains(&"Download to: ".to_string()));
    assert!(transcript.iter().any(|t| t.contains("[2] http://b")));
}

#[tokio::test]
async fn test_trim_start_only_uses_duration_as_end() {
    let console = Arc::new(ScriptedConsole::new(&[
        "https://example.com/v",
        "",
        "",
        "",
        "00:00:10",
        "",
    ]));
    let process = Arc::new(ScriptedProcess::new(two_track_outputs()));

    let report = interactor(console, process.clone(), "")
        .execute(GrabRequest::default())
        .await
        .unwrap();

    assert_eq!(
        report.session.trim,
        Some(TrimWindow {
            from: "00:00:10".to_string(),
            to: "00:04:32".to_string(),
        })
    );

    let forwarded = &process.forwarded_calls()[0];
    assert_eq!(forwarded.count_arg("-ss"), 2);
    assert_eq!(forwarded.count_arg("-to"), 2);
    assert_eq!(forwarded.args[..6], ["-ss", "00:00:10", "-to", "00:04:32", "-i", "http://a"]);
}

#[tokio::test]
async fn test_prefilled_source_with_codecs_and_destination() {
    let console = Arc::new(ScriptedConsole::new(&[
        "22",
        "libx264",
        "",
        "",
        "",
        "clip.mp4",
        "",
    ]));
    let process = Arc::new(ScriptedProcess::new(vec![
        ok(PROBE_JSON),
        ok("http://single\n"),
    ]));

    let report = interactor(console.clone(), process.clone(), "/media")
        .execute(GrabRequest {
            source: Some("https://example.com/v".to_string()),
            skip_codecs: false,
            dry_run: false,
        })
        .await
        .unwrap();

    let expected_output = format!("/media{}clip.mp4", MAIN_SEPARATOR);
    assert_eq!(report.output_path, expected_output);
    assert_eq!(report.session.codecs, CodecChoice::new("libx264", "copy"));
    assert_eq!(
        process.forwarded_calls()[0].args,
        vec![
            "-i".to_string(),
            "http://single".to_string(),
            "-c:v".to_string(),
            "libx264".to_string(),
            "-c:a".to_string(),
            "copy".to_string(),
            "-y".to_string(),
            expected_output,
        ]
    );

    let transcript = console.transcript();
    assert!(!transcript.iter().any(|t| t.starts_with("Please, input URL")));
    assert!(transcript.contains(&"Download to [/media]: ".to_string()));
}

#[tokio::test]
async fn test_dry_run_does_not_start_muxer() {
    let console = Arc::new(ScriptedConsole::new(&["https://example.com/v"]));
    let process = Arc::new(ScriptedProcess::new(two_track_outputs()));

    let report = interactor(console.clone(), process.clone(), "")
        .execute(GrabRequest {
            dry_run: true,
            ..GrabRequest::default()
        })
        .await
        .unwrap();

    assert!(!report.executed);
    assert!(process.forwarded_calls().is_empty());
    let command_line = report.invocation.to_string();
    assert!(console.transcript().iter().any(|t| t.contains(&command_line)));
}

#[tokio::test]
async fn test_no_links_aborts_pipeline() {
    let console = Arc::new(ScriptedConsole::new(&["https://example.com/v"]));
    let process = Arc::new(ScriptedProcess::new(vec![ok(PROBE_JSON), ok("\n")]));

    let result = interactor(console.clone(), process.clone(), "")
        .execute(GrabRequest::default())
        .await;

    assert!(matches!(result, Err(GrabError::NoLinks)));
    assert!(process.forwarded_calls().is_empty());
    assert!(!console
        .transcript()
        .iter()
        .any(|t| t.starts_with("Input IN")));
}

#[tokio::test]
async fn test_blank_source_is_rejected() {
    let console = Arc::new(ScriptedConsole::new(&["   "]));
    let process = Arc::new(ScriptedProcess::new(Vec::new()));

    let result = interactor(console, process.clone(), "")
        .execute(GrabRequest::default())
        .await;

    assert!(matches!(result, Err(GrabError::MissingSource)));
    assert!(process.captured_calls().is_empty());
}

#[tokio::test]
async fn test_malformed_trim_timestamp() {
    let console = Arc::new(ScriptedConsole::new(&[
        "https://example.com/v",
        "",
        "",
        "",
        "1:00",
        "",
    ]));
    let process = Arc::new(ScriptedProcess::new(two_track_outputs()));

    let result = interactor(console, process.clone(), "")
        .execute(GrabRequest::default())
        .await;

    assert!(matches!(result, Err(GrabError::InvalidTimestamp { .. })));
    assert!(process.forwarded_calls().is_empty());
}

#[tokio::test]
async fn test_muxer_failure_is_reported() {
    let console = Arc::new(ScriptedConsole::new(&["https://example.com/v"]));
    let process = Arc::new(ScriptedProcess::with_forward_exit(
        two_track_outputs(),
        Some(1),
    ));

    match interactor(console, process, "")
        .execute(GrabRequest::default())
        .await
    {
        Err(GrabError::ExternalTool { tool, message }) => {
            assert_eq!(tool, "ffmpeg");
            assert_eq!(message, "exited with code 1");
        }
        other => panic!("unexpected result: {:?}", other),
    }
}
