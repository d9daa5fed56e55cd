//! CLI parse and output tests.

use super::{run_exit_code, usage_exit_code, Cli};
use crate::cli::commands::{progress_line, run_optimize};
use clap::error::ErrorKind;
use clap::Parser;
use imgopt_core::config::OptimizeConfig;
use imgopt_core::decode::ColorMode;
use imgopt_core::pipeline::Event;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::thread;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

fn parse_err(args: &[&str]) -> ErrorKind {
    Cli::try_parse_from(args).unwrap_err().kind()
}

#[test]
fn cli_parse_url_only() {
    let cli = parse(&["optimize", "https://example.com/photos/sunset.jpg"]);
    assert_eq!(cli.url, "https://example.com/photos/sunset.jpg");
    assert_eq!(cli.width, None);
    assert_eq!(cli.height, None);
    assert_eq!(cli.filename, None);
}

#[test]
fn cli_parse_all_positionals() {
    let cli = parse(&["optimize", "https://example.com/a.jpg", "800", "600", "hero image"]);
    assert_eq!(cli.width, Some(800));
    assert_eq!(cli.height, Some(600));
    assert_eq!(cli.filename.as_deref(), Some("hero image"));
}

#[test]
fn cli_parse_width_only() {
    let cli = parse(&["optimize", "https://example.com/a.jpg", "640"]);
    assert_eq!(cli.width, Some(640));
    assert_eq!(cli.height, None);
}

#[test]
fn cli_missing_url_is_usage_error() {
    let kind = parse_err(&["optimize"]);
    assert_eq!(kind, ErrorKind::MissingRequiredArgument);
    assert_eq!(usage_exit_code(kind), 1);
}

#[test]
fn cli_non_integer_width_is_usage_error() {
    let kind = parse_err(&["optimize", "https://example.com/a.jpg", "wide"]);
    assert_eq!(kind, ErrorKind::ValueValidation);
    assert_eq!(usage_exit_code(kind), 1);
}

#[test]
fn cli_zero_height_is_usage_error() {
    let kind = parse_err(&["optimize", "https://example.com/a.jpg", "800", "0"]);
    assert_eq!(usage_exit_code(kind), 1);
}

#[test]
fn cli_help_exits_zero() {
    let kind = parse_err(&["optimize", "--help"]);
    assert_eq!(kind, ErrorKind::DisplayHelp);
    assert_eq!(usage_exit_code(kind), 0);
}

#[test]
fn progress_lines() {
    assert_eq!(
        progress_line(&Event::Downloading {
            url: "https://x.test/a.jpg".to_string()
        }),
        "Downloading: https://x.test/a.jpg"
    );
    assert_eq!(
        progress_line(&Event::Downloaded {
            bytes: 10,
            content_length: Some(3 * 1024 * 1024 / 2),
        }),
        "Download size: 1.50 MB"
    );
    assert_eq!(
        progress_line(&Event::Decoded {
            width: 1600,
            height: 1000,
            mode: ColorMode::Rgb,
        }),
        "Original size: 1600x1000"
    );
    assert_eq!(
        progress_line(&Event::Resized {
            width: 800,
            height: 500
        }),
        "Resized to: 800x500"
    );
    assert_eq!(
        progress_line(&Event::Renamed {
            file_name: "foo-1.webp".to_string()
        }),
        "Note: File exists, saving as: foo-1.webp"
    );
    assert_eq!(
        progress_line(&Event::Saved {
            path: PathBuf::from("/p/public/images/foo.webp"),
            size: 2048,
        }),
        "Saved: /p/public/images/foo.webp (2.0 KB)"
    );
}

/// Serves a single `404 Not Found` on a loopback port and returns the base URL.
fn not_found_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                match stream.read(&mut buf) {
                    Ok(0) | Err(_) => break,
                    Ok(n) => request.extend_from_slice(&buf[..n]),
                }
            }
            let _ = stream.write_all(
                b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            );
        }
    });
    format!("http://{}", addr)
}

#[test]
fn not_found_run_exits_one() {
    let url = format!("{}/photos/missing.jpg", not_found_server());
    let cli = parse(&["optimize", &url, "100"]);

    let result = run_optimize(&cli, &OptimizeConfig::default());

    let err = result.as_ref().unwrap_err();
    assert!(format!("{:#}", err).contains("HTTP 404"), "{:#}", err);
    assert_eq!(run_exit_code(&result), 1);
}

#[test]
fn successful_run_exits_zero() {
    assert_eq!(run_exit_code(&Ok(())), 0);
}
