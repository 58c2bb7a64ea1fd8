//! Interactive logging session.
//!
//! Reads one command per line and keeps a [`SleepLog`] for the lifetime of the
//! session. Mistakes print an `error:` line and the session carries on; only
//! I/O failures end it early.

use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use sleep_core::{ClockStyle, SleepLog, Thresholds, TimeOfDay};

use super::report::{format_hours, format_pending, format_report, format_span};
use super::util::parse_time;
use crate::Config;

const HELP: &str = "\
Commands:
  sleep <TIME>   set when sleep started (alias: start)
  wake <TIME>    set when you woke up (alias: end)
  add            add the entry once both times are set
  clear          reset both times
  show           show pending times and the report
  help           show this help
  quit           end the session (alias: exit)

Times: 23:00, 7:30, 11pm, 6:45 am, now";

/// One parsed line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    Sleep(TimeOfDay),
    Wake(TimeOfDay),
    Add,
    Clear,
    Show,
    Help,
    Quit,
}

impl FromStr for SessionCommand {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (keyword, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(k, r)| (k, r.trim()));
        let keyword = keyword.to_ascii_lowercase();

        let no_argument = |command: Self| -> Result<Self> {
            if rest.is_empty() {
                Ok(command)
            } else {
                bail!("'{keyword}' takes no argument")
            }
        };
        let time_argument = || -> Result<TimeOfDay> {
            if rest.is_empty() {
                bail!("'{keyword}' needs a time, e.g. '{keyword} 23:00'");
            }
            parse_time(rest)
        };

        match keyword.as_str() {
            "sleep" | "start" => Ok(Self::Sleep(time_argument()?)),
            "wake" | "end" => Ok(Self::Wake(time_argument()?)),
            "add" => no_argument(Self::Add),
            "clear" => no_argument(Self::Clear),
            "show" => no_argument(Self::Show),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            _ => bail!("unknown command '{keyword}', type 'help' for a list"),
        }
    }
}

/// Whether the session should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// State for one interactive session.
#[derive(Debug)]
pub struct Session {
    log: SleepLog,
    thresholds: Thresholds,
    clock: ClockStyle,
}

impl Session {
    pub fn new(config: &Config) -> Result<Self> {
        let thresholds = config
            .thresholds()
            .context("invalid sleep thresholds in configuration")?;
        Ok(Self {
            log: SleepLog::new(config.equal_times),
            thresholds,
            clock: config.clock,
        })
    }

    pub const fn log(&self) -> &SleepLog {
        &self.log
    }

    /// Applies one command and writes its feedback.
    pub fn apply<W: Write>(&mut self, writer: &mut W, command: SessionCommand) -> Result<Flow> {
        tracing::debug!(?command, "session command");

        match command {
            SessionCommand::Sleep(time) => {
                self.log.set_start(time);
                writeln!(writer, "Sleep time set to {}", time.display(self.clock))?;
            }
            SessionCommand::Wake(time) => {
                self.log.set_end(time);
                writeln!(writer, "Wake time set to {}", time.display(self.clock))?;
            }
            SessionCommand::Add => match self.log.confirm() {
                Ok(entry) => {
                    writeln!(
                        writer,
                        "Added {} ({})",
                        format_hours(entry.hours),
                        format_span(&entry, self.clock)
                    )?;
                    writeln!(writer)?;
                    self.write_report(writer)?;
                }
                Err(err) => {
                    tracing::debug!(%err, "add rejected");
                    writeln!(writer, "Set both sleep and wake times first ({err}).")?;
                }
            },
            SessionCommand::Clear => {
                self.log.clear();
                writeln!(writer, "Times cleared.")?;
            }
            SessionCommand::Show => {
                write!(writer, "{}", format_pending(&self.log, self.clock))?;
                writeln!(writer)?;
                self.write_report(writer)?;
            }
            SessionCommand::Help => writeln!(writer, "{HELP}")?,
            SessionCommand::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    fn write_report<W: Write>(&self, writer: &mut W) -> Result<()> {
        let report = format_report(self.log.entries(), &self.thresholds, self.clock);
        write!(writer, "{report}")?;
        Ok(())
    }
}

/// Runs a session until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(
    mut reader: R,
    writer: &mut W,
    config: &Config,
    prompt: bool,
) -> Result<()> {
    let mut session = Session::new(config)?;

    if prompt {
        writeln!(writer, "Sleep log. Type 'help' for commands.")?;
    }

    let mut buffer = Vec::new();
    loop {
        if prompt {
            write!(writer, "> ")?;
            writer.flush()?;
        }
        buffer.clear();
        let read = reader
            .read_until(b'\n', &mut buffer)
            .context("failed to read input")?;
        if read == 0 {
            break;
        }
        // Undecodable input is a user error like any other.
        let Ok(line) = std::str::from_utf8(&buffer) else {
            writeln!(writer, "error: input is not valid UTF-8")?;
            continue;
        };
        if line.trim().is_empty() {
            continue;
        }

        let flow = match line.parse::<SessionCommand>() {
            Ok(command) => session.apply(writer, command)?,
            Err(err) => {
                writeln!(writer, "error: {err:#}")?;
                Flow::Continue
            }
        };
        if flow == Flow::Quit {
            break;
        }
    }

    tracing::debug!(
        entries = session.log().entries().len(),
        "session ended"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;
    use sleep_core::{Category, EqualTimes};

    fn transcript(input: &str, config: &Config) -> String {
        let mut output = Vec::new();
        run(input.as_bytes(), &mut output, config, false).unwrap();
        String::from_utf8(output).unwrap()
    }

    fn hm(h: u32, m: u32) -> TimeOfDay {
        TimeOfDay::new(h, m).unwrap()
    }

    // ========== Command Parsing Tests ==========

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            "sleep 11pm".parse::<SessionCommand>().unwrap(),
            SessionCommand::Sleep(hm(23, 0))
        );
        assert_eq!(
            "  START   23:30 ".parse::<SessionCommand>().unwrap(),
            SessionCommand::Sleep(hm(23, 30))
        );
        assert_eq!(
            "wake 6:45 am".parse::<SessionCommand>().unwrap(),
            SessionCommand::Wake(hm(6, 45))
        );
        assert_eq!(
            "end 07:00".parse::<SessionCommand>().unwrap(),
            SessionCommand::Wake(hm(7, 0))
        );
        assert_eq!("add".parse::<SessionCommand>().unwrap(), SessionCommand::Add);
        assert_eq!("Clear".parse::<SessionCommand>().unwrap(), SessionCommand::Clear);
        assert_eq!("show".parse::<SessionCommand>().unwrap(), SessionCommand::Show);
        assert_eq!("?".parse::<SessionCommand>().unwrap(), SessionCommand::Help);
        assert_eq!("exit".parse::<SessionCommand>().unwrap(), SessionCommand::Quit);
    }

    #[test]
    fn test_parse_command_errors() {
        let err = "sleep".parse::<SessionCommand>().unwrap_err();
        assert!(err.to_string().contains("needs a time"));

        let err = "add now".parse::<SessionCommand>().unwrap_err();
        assert!(err.to_string().contains("takes no argument"));

        let err = "nap 2pm".parse::<SessionCommand>().unwrap_err();
        assert!(err.to_string().contains("unknown command 'nap'"));

        assert!("wake 25:00".parse::<SessionCommand>().is_err());
    }

    // ========== Session Behavior Tests ==========

    #[test]
    fn test_add_resets_inputs_and_appends() {
        let mut session = Session::new(&Config::default()).unwrap();
        let mut sink = Vec::new();

        session.apply(&mut sink, SessionCommand::Sleep(hm(23, 0))).unwrap();
        session.apply(&mut sink, SessionCommand::Wake(hm(7, 0))).unwrap();
        session.apply(&mut sink, SessionCommand::Add).unwrap();

        let log = session.log();
        assert_eq!(log.entries().hours().collect::<Vec<_>>(), vec![8.0]);
        assert_eq!(log.start(), None);
        assert_eq!(log.end(), None);
        let insight = log.insight(&Thresholds::default());
        assert_eq!(insight.category, Category::Healthy);
    }

    #[test]
    fn test_add_is_gated() {
        let mut session = Session::new(&Config::default()).unwrap();
        let mut output = Vec::new();

        session.apply(&mut output, SessionCommand::Wake(hm(7, 0))).unwrap();
        session.apply(&mut output, SessionCommand::Add).unwrap();

        assert!(session.log().entries().is_empty());
        assert_eq!(session.log().end(), Some(hm(7, 0)));
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Set both sleep and wake times first (sleep time not set)."));
    }

    #[test]
    fn test_quit_stops_reading() {
        let output = transcript("sleep 23:00\nquit\nwake 07:00\nadd\n", &Config::default());
        assert!(!output.contains("Added"));
    }

    #[test]
    fn test_invalid_config_thresholds_fail() {
        let config = Config {
            healthy_hours: 4.0,
            fair_hours: 6.0,
            ..Config::default()
        };
        assert!(Session::new(&config).is_err());
    }

    #[test]
    fn test_transcript_overnight_entry() {
        let output = transcript("sleep 11pm\nwake 7am\nadd\n", &Config::default());
        assert_snapshot!(output, @r"
        Sleep time set to 11:00 PM
        Wake time set to 7:00 AM
        Added 8.0 hrs (11:00 PM -> 7:00 AM)

        SLEEP LOG
        ─────────
        Average sleep:  8.00 hrs
        ✅ Great job! Your sleep cycle is healthy.

        ENTRIES
        ───────
          1. 11:00 PM -> 7:00 AM   8.0 hrs
        ");
    }

    #[test]
    fn test_transcript_errors_and_show() {
        let config = Config {
            clock: ClockStyle::TwentyFourHour,
            equal_times: EqualTimes::Zero,
            ..Config::default()
        };
        let input = "\nnap 2pm\nadd\nsleep 7:00\nwake 07:00\nshow\nadd\nclear\nshow\n";
        let output = transcript(input, &config);
        assert_snapshot!(output, @r"
        error: unknown command 'nap', type 'help' for a list
        Set both sleep and wake times first (sleep and wake times not set).
        Sleep time set to 07:00
        Wake time set to 07:00
        Sleep time: 07:00
        Wake time:  07:00

        SLEEP LOG
        ─────────
        No sleep entries yet.

        Hint: set a sleep time and a wake time, then add the entry.
        Added 0.0 hrs (07:00 -> 07:00)

        SLEEP LOG
        ─────────
        Average sleep:  0.00 hrs
        ❌ Poor sleep cycle. Consider reducing screen time, avoiding caffeine, and maintaining consistency.

        ENTRIES
        ───────
          1. 07:00 -> 07:00   0.0 hrs
        Times cleared.
        Sleep time: (not set)
        Wake time:  (not set)
        (set both times to add an entry)

        SLEEP LOG
        ─────────
        Average sleep:  0.00 hrs
        ❌ Poor sleep cycle. Consider reducing screen time, avoiding caffeine, and maintaining consistency.

        ENTRIES
        ───────
          1. 07:00 -> 07:00   0.0 hrs
        ");
    }

    #[test]
    fn test_invalid_utf8_line_keeps_session_going() {
        let mut output = Vec::new();
        run(
            &b"sleep 23:00\nwake 07:00\n\xff\nadd\n"[..],
            &mut output,
            &Config::default(),
            false,
        )
        .unwrap();
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("error: input is not valid UTF-8\n"));
        assert!(output.contains("Added 8.0 hrs (11:00 PM -> 7:00 AM)"));
    }

    #[test]
    fn test_help_lists_commands() {
        let output = transcript("help\n", &Config::default());
        assert!(output.starts_with("Commands:"));
        assert!(output.contains("sleep <TIME>"));
    }

    #[test]
    fn test_prompt_only_when_interactive() {
        let mut output = Vec::new();
        run("show\n".as_bytes(), &mut output, &Config::default(), true).unwrap();
        let output = String::from_utf8(output).unwrap();
        assert!(output.starts_with("Sleep log. Type 'help' for commands.\n> "));
    }
}
