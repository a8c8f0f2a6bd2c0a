//! # Command-line interface
//!
//! `api-toolkit request <method> <url>` sends one request and renders the
//! response. Every failure surfaces as a `CliError`, which `main` prints
//! before exiting with a non-zero code.

use std::io::Write;

use clap::{Parser, Subcommand};
use thiserror::Error;
use tracing::{Instrument, debug, info_span};

use crate::display::messages::{info_line, success_line};
use crate::display::response_panel;
use crate::display::style::Palette;
use crate::history::RequestHistory;
use crate::http::client::HttpClient;
use crate::http::error::{RequestError, TransportError};
use crate::http::method::HttpMethod;
use crate::http::request::DEFAULT_TIMEOUT_SECS;

#[derive(Debug, Parser)]
#[command(
    name = "api-toolkit",
    version,
    about = "API Toolkit: send HTTP requests and inspect the responses."
)]
pub struct Args {
    #[arg(long, global = true, help = "Disable colored output.")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check that the toolkit is installed and working.
    Hello,

    /// Make HTTP requests to an API.
    #[command(subcommand)]
    Request(RequestCommand),
}

#[derive(Debug, Subcommand)]
pub enum RequestCommand {
    /// Make a GET request to a URL.
    Get {
        #[command(flatten)]
        target: Target,
    },

    /// Make a POST request to a URL.
    Post {
        #[command(flatten)]
        target: Target,

        #[arg(short, long, help = "Request body (JSON string or plain text).")]
        data: Option<String>,
    },

    /// Make a PUT request to a URL.
    Put {
        #[command(flatten)]
        target: Target,

        #[arg(short, long, help = "Request body.")]
        data: Option<String>,
    },

    /// Make a DELETE request to a URL.
    Delete {
        #[command(flatten)]
        target: Target,
    },
}

/// Options shared by every request subcommand.
#[derive(Debug, clap::Args)]
pub struct Target {
    /// Destination URL.
    pub url: String,

    #[arg(
        short = 'H',
        long = "header",
        value_name = "HEADER",
        help = "HTTP header in 'Key: Value' form. May be repeated."
    )]
    pub headers: Vec<String>,

    #[arg(
        short,
        long,
        default_value_t = DEFAULT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..),
        help = "Timeout in seconds."
    )]
    pub timeout: u64,

    #[arg(long, help = "Do not show response headers.")]
    pub no_headers: bool,
}

impl RequestCommand {
    fn into_parts(self) -> (HttpMethod, Target, Option<String>) {
        match self {
            RequestCommand::Get { target } => (HttpMethod::Get, target, None),
            RequestCommand::Post { target, data } => (HttpMethod::Post, target, data),
            RequestCommand::Put { target, data } => (HttpMethod::Put, target, data),
            RequestCommand::Delete { target } => (HttpMethod::Delete, target, None),
        }
    }
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid header: '{0}'. Expected format: 'Key: Value'")]
    MalformedHeader(String),

    #[error(transparent)]
    Request(#[from] RequestError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("Failed to start the async runtime: {0}")]
    Runtime(#[source] std::io::Error),

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Runs one command, writing everything meant for stdout to `out`.
pub fn run(args: Args, palette: Palette, out: &mut impl Write) -> Result<(), CliError> {
    match args.command {
        Command::Hello => {
            writeln!(out, "{}", success_line("API Toolkit is working!", palette))?;
            writeln!(
                out,
                "{}",
                info_line("Run `api-toolkit --help` to see every command.", palette)
            )?;
            Ok(())
        }
        Command::Request(command) => send(command, palette, out),
    }
}

fn send(command: RequestCommand, palette: Palette, out: &mut impl Write) -> Result<(), CliError> {
    let (method, target, body) = command.into_parts();
    let headers = parse_headers(&target.headers)?;

    let client = HttpClient::new(target.timeout);
    let request = client.build(method.as_str(), &target.url, headers, body)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(CliError::Runtime)?;
    // The span drives the spinner and closes before anything is printed.
    let span = info_span!("Making request...", method = %request.method(), url = request.url());
    let response = runtime.block_on(client.execute(&request).instrument(span))?;

    debug!(
        entry = ?RequestHistory::from_response(&response),
        elapsed = ?response.elapsed(),
        success = response.is_success(),
        client_error = response.is_client_error(),
        server_error = response.is_server_error(),
        "request finished"
    );

    writeln!(
        out,
        "{}",
        info_line(
            &format!("Request completed in {}ms", response.elapsed_ms()),
            palette
        )
    )?;
    write!(
        out,
        "{}",
        response_panel::render(&response, !target.no_headers, palette)
    )?;
    out.flush()?;

    Ok(())
}

/// Splits each `Key: Value` argument on its first colon. Both sides are
/// trimmed; order and case are kept.
pub fn parse_headers(raw_headers: &[String]) -> Result<Vec<(String, String)>, CliError> {
    raw_headers
        .iter()
        .map(|raw| {
            let (key, value) = raw
                .split_once(':')
                .ok_or_else(|| CliError::MalformedHeader(raw.clone()))?;
            Ok((key.trim().to_string(), value.trim().to_string()))
        })
        .collect()
}
