//! Start/stop request handling
//!
//! Thin glue between a host command source and the scheduler. Resolves
//! the target observer by name, parses the optional base level (falling
//! back to the default with a notice rather than failing), and flips
//! the session flag. Spawning the periodic driver stays with the host.

use std::collections::HashSet;

use crate::scheduler::Scheduler;

/// Base level used when a start request does not name one.
pub const DEFAULT_BASE_LEVEL: i32 = 232;

/// Resolves observer names known to the host.
pub trait ObserverDirectory {
    fn contains(&self, name: &str) -> bool;
}

impl ObserverDirectory for HashSet<String> {
    fn contains(&self, name: &str) -> bool {
        HashSet::contains(self, name)
    }
}

/// Outcome of one start/stop request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Started {
        observer: String,
        base_level: i32,
        /// Set when a malformed base level fell back to the default.
        notice: Option<String>,
    },
    AlreadyRunning,
    Stopped,
    ObserverNotFound { name: String },
    /// Start without a target from a non-observer sender.
    MissingObserver,
    Usage,
}

impl CommandOutcome {
    /// User-visible reply text.
    pub fn user_message(&self) -> String {
        match self {
            CommandOutcome::Started { .. } => "Backrooms generation started!".to_string(),
            CommandOutcome::AlreadyRunning => "Generation is already running!".to_string(),
            CommandOutcome::Stopped => "Generation stopped!".to_string(),
            CommandOutcome::ObserverNotFound { name } => {
                format!("Observer '{name}' not found!")
            }
            CommandOutcome::MissingObserver => {
                "Only observers can start generation without naming a target!".to_string()
            }
            CommandOutcome::Usage => {
                "Usage: backrooms <start|stop> [observer] [baseLevel]".to_string()
            }
        }
    }
}

/// Handle a start/stop request against the scheduler.
///
/// `sender` is the invoking observer's name, when the request came from
/// one; console senders must name a target explicitly. On a successful
/// start the parsed base level is written into the scheduler config and
/// the session is activated; the host then spawns the periodic driver.
pub fn handle<D: ObserverDirectory>(
    args: &[&str],
    sender: Option<&str>,
    directory: &D,
    scheduler: &mut Scheduler,
) -> CommandOutcome {
    match args {
        ["start", rest @ ..] => {
            let target = match rest.first() {
                Some(name) => {
                    if !directory.contains(name) {
                        return CommandOutcome::ObserverNotFound { name: name.to_string() };
                    }
                    name.to_string()
                }
                None => match sender {
                    Some(name) => name.to_string(),
                    None => return CommandOutcome::MissingObserver,
                },
            };

            let (base_level, notice) = match rest.get(1) {
                Some(raw) => match raw.parse::<i32>() {
                    Ok(level) => (level, None),
                    Err(_) => {
                        log::warn!("unparsable base level {raw:?}, using {DEFAULT_BASE_LEVEL}");
                        (
                            DEFAULT_BASE_LEVEL,
                            Some("Invalid base level! Using default value.".to_string()),
                        )
                    }
                },
                None => (DEFAULT_BASE_LEVEL, None),
            };

            if !scheduler.session.activate() {
                return CommandOutcome::AlreadyRunning;
            }
            scheduler.config.base_level = base_level;
            log::info!("generation started for {target} at base level {base_level}");
            CommandOutcome::Started { observer: target, base_level, notice }
        }
        ["stop", ..] => {
            scheduler.session.deactivate();
            log::info!("generation stop requested");
            CommandOutcome::Stopped
        }
        _ => CommandOutcome::Usage,
    }
}
