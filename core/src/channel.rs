//! Command boundary between a host application and the [`NetworkBinder`].
//!
//! A host sends a bare command name and gets exactly one [`MethodResult`]
//! back. The channel never guesses: names it does not know are answered with
//! [`MethodResult::NotImplemented`].

use std::fmt;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use tracing::{debug, info, warn};

use wifibind_common::error::CommandError;

use crate::binder::NetworkBinder;

pub const CHANNEL_NAME: &str = "network_binder";
pub const BIND_TO_WIFI: &str = "bindToWifi";

pub const BIND_ERROR_CODE: &str = "ERROR";
pub const BIND_ERROR_MESSAGE: &str = "Failed to bind to WiFi network";

/// Commands understood by the channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    BindToWifi,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(method: &str) -> Result<Self, Self::Err> {
        match method {
            BIND_TO_WIFI => Ok(Command::BindToWifi),
            other => Err(CommandError::UnknownCommand(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MethodResult {
    /// Empty acknowledgement.
    Success,
    Error {
        code: String,
        message: String,
        details: Option<String>,
    },
    NotImplemented {
        method: String,
    },
}

impl MethodResult {
    pub fn is_success(&self) -> bool {
        matches!(self, MethodResult::Success)
    }
}

/// One-line rendering used by the line server.
impl fmt::Display for MethodResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MethodResult::Success => f.write_str("OK"),
            MethodResult::Error {
                code,
                message,
                details: Some(details),
            } => write!(f, "ERROR {code} {message}: {details}"),
            MethodResult::Error { code, message, details: None } => {
                write!(f, "ERROR {code} {message}")
            }
            MethodResult::NotImplemented { method } => write!(f, "NOT_IMPLEMENTED {method}"),
        }
    }
}

pub struct NetworkBinderChannel {
    binder: NetworkBinder,
}

impl NetworkBinderChannel {
    pub fn new(binder: NetworkBinder) -> Self {
        Self { binder }
    }

    pub fn name(&self) -> &'static str {
        CHANNEL_NAME
    }

    pub fn binder(&self) -> &NetworkBinder {
        &self.binder
    }

    /// Dispatches a single command by name.
    pub fn handle(&self, method: &str) -> MethodResult {
        let command = match method.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                warn!("{}: {e}", CHANNEL_NAME);
                return MethodResult::NotImplemented {
                    method: method.to_string(),
                };
            }
        };

        let result = match command {
            Command::BindToWifi => match self.binder.bind_to_wifi_network() {
                Ok(()) => MethodResult::Success,
                Err(e) => MethodResult::Error {
                    code: BIND_ERROR_CODE.to_string(),
                    message: BIND_ERROR_MESSAGE.to_string(),
                    details: Some(e.to_string()),
                },
            },
        };

        info!("{}: {method} -> {result}", CHANNEL_NAME);
        result
    }

    /// Answers one command per input line until `input` is exhausted.
    ///
    /// Only the line terminator is stripped, so padded names stay unknown.
    /// Empty lines are skipped and bytes that are not UTF-8 are replaced
    /// rather than ending the session. Returns how many commands were handled.
    pub fn serve<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> io::Result<usize> {
        let mut handled = 0;
        let mut buf: Vec<u8> = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            let line: &str = &line;
            let method = line.strip_suffix('\n').unwrap_or(line);
            let method = method.strip_suffix('\r').unwrap_or(method);
            if method.is_empty() {
                continue;
            }
            debug!("{}: received '{method}'", CHANNEL_NAME);

            let reply = self.handle(method);
            writeln!(output, "{reply}")?;
            output.flush()?;
            handled += 1;
        }
        Ok(handled)
    }
}
