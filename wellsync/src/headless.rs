//! Headless mode for WellSync.
//!
//! A line-oriented protocol on stdin, for scripting and tests:
//! - Lines starting with `#` are commands (analyze, quiz, reflect, ...)
//! - Any other line is sent to the companion chat
//! - Output lines are tagged (`[MOOD]`, `[AI]`, `[ERROR]`, ...), or one
//!   JSON document per result after `#json`

use std::io::{self, BufRead, Write};

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use wellsync_core::{Companion, MoodCategory, QuizAnswers, WellnessSession};

const HELP: &[&str] = &[
    "  #analyze <text>             - Detect the mood of a diary entry",
    "  #quiz <a1>, <a2>, ... <a5>  - Score the lifestyle quiz",
    "  #schedule                   - Build today's routine",
    "  #reflect <mood> | <text>    - Compare morning mood with an evening entry",
    "  #insights                   - Summarize the day",
    "  #json                       - Toggle JSON output",
    "  #help                       - Show this help",
    "  #quit                       - Exit",
    "  (anything else is sent to the companion)",
];

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadlessCommand {
    Chat(String),
    Analyze(String),
    Quiz(Vec<String>),
    Schedule,
    Reflect { morning: String, evening: String },
    Insights,
    ToggleJson,
    Help,
    Quit,
    Usage(&'static str),
    Unknown(String),
}

/// Parse a trimmed, non-empty input line.
pub fn parse_line(line: &str) -> HeadlessCommand {
    let Some(command) = line.strip_prefix('#') else {
        return HeadlessCommand::Chat(line.to_string());
    };

    let (name, rest) = match command.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (command, ""),
    };

    match name {
        "analyze" => HeadlessCommand::Analyze(rest.to_string()),
        "quiz" if rest.is_empty() => HeadlessCommand::Usage("#quiz <a1>, <a2>, <a3>, <a4>, <a5>"),
        "quiz" => HeadlessCommand::Quiz(rest.split(',').map(|a| a.trim().to_string()).collect()),
        "schedule" => HeadlessCommand::Schedule,
        "reflect" => match rest.split_once('|') {
            Some((morning, evening)) => HeadlessCommand::Reflect {
                morning: morning.trim().to_string(),
                evening: evening.trim().to_string(),
            },
            None => HeadlessCommand::Usage("#reflect <mood> | <text>"),
        },
        "insights" => HeadlessCommand::Insights,
        "json" => HeadlessCommand::ToggleJson,
        "help" => HeadlessCommand::Help,
        "quit" | "exit" => HeadlessCommand::Quit,
        other => HeadlessCommand::Unknown(other.to_string()),
    }
}

/// Session state for one headless run.
pub struct HeadlessSession {
    session: WellnessSession,
    companion: Companion,
    rng: StdRng,
    json: bool,
}

impl HeadlessSession {
    pub fn new(json: bool, rng: StdRng) -> Self {
        Self {
            session: WellnessSession::new(),
            companion: Companion::new(),
            rng,
            json,
        }
    }

    /// Execute one command. Returns false when the run should end.
    pub fn execute<W: Write>(&mut self, command: HeadlessCommand, out: &mut W) -> io::Result<bool> {
        match command {
            HeadlessCommand::Quit => {
                writeln!(out, "Goodbye!")?;
                return Ok(false);
            }
            HeadlessCommand::Help => {
                writeln!(out, "[HELP]")?;
                for line in HELP {
                    writeln!(out, "{line}")?;
                }
            }
            HeadlessCommand::ToggleJson => {
                self.json = !self.json;
                writeln!(out, "[JSON] {}", if self.json { "on" } else { "off" })?;
            }
            HeadlessCommand::Usage(usage) => writeln!(out, "[ERROR] Usage: {usage}")?,
            HeadlessCommand::Unknown(name) => {
                writeln!(out, "[ERROR] Unknown command #{name}. Type #help for help.")?
            }
            HeadlessCommand::Chat(text) => {
                if self.companion.send(&text).is_some() {
                    let reply = self.companion.reply(&mut self.rng);
                    if self.json {
                        write_json(out, reply)?;
                    } else {
                        writeln!(out, "[AI] {}", reply.text)?;
                    }
                }
            }
            HeadlessCommand::Analyze(text) => match self.session.analyze_entry(&text) {
                Ok(result) if self.json => write_json(out, result)?,
                Ok(result) => {
                    writeln!(
                        out,
                        "[MOOD] {} ({:.0}%)",
                        result.mood,
                        result.confidence * 100.0
                    )?;
                    writeln!(out, "[FACTORS] {}", result.stress_factors.join("; "))?;
                    writeln!(out, "[SUGGESTION] {}", result.suggestion)?;
                }
                Err(e) => writeln!(out, "[ERROR] {e}")?,
            },
            HeadlessCommand::Quiz(answers) => match QuizAnswers::from_form(&answers) {
                Ok(answers) => {
                    let result = self.session.submit_quiz(&answers);
                    if self.json {
                        write_json(out, result)?;
                    } else {
                        writeln!(out, "[SCORE] {}/100", result.wellness_score)?;
                        for rec in &result.recommendations {
                            writeln!(out, "[RECOMMEND] {rec}")?;
                        }
                    }
                }
                Err(e) => writeln!(out, "[ERROR] {e}")?,
            },
            HeadlessCommand::Schedule => match self.session.daily_schedule() {
                Ok(schedule) if self.json => write_json(out, &schedule)?,
                Ok(schedule) => {
                    writeln!(out, "[SCHEDULE] {}", schedule.message)?;
                    for (i, item) in schedule.routine.iter().enumerate() {
                        writeln!(out, "  {}. {item}", i + 1)?;
                    }
                }
                Err(e) => writeln!(out, "[ERROR] {e}")?,
            },
            HeadlessCommand::Reflect { morning, evening } => {
                match self.session.reflect(&morning, &evening) {
                    Ok(result) if self.json => write_json(out, result)?,
                    Ok(result) => {
                        // Unrecognized labels score as Neutral but are echoed back
                        let morning_label = match MoodCategory::from_label(&morning) {
                            Some(mood) => mood.to_string(),
                            None => morning.clone(),
                        };
                        writeln!(
                            out,
                            "[TREND] {} -> {}: {} ({:+})",
                            morning_label,
                            result.evening_mood,
                            result.trend,
                            result.mood_change
                        )?;
                        for insight in &result.insights {
                            writeln!(out, "[INSIGHT] {insight}")?;
                        }
                        writeln!(out, "[SUGGESTION] {}", result.suggestion)?;
                    }
                    Err(e) => writeln!(out, "[ERROR] {e}")?,
                }
            }
            HeadlessCommand::Insights => match self.session.insights() {
                Ok(report) if self.json => write_json(out, &report)?,
                Ok(report) => {
                    writeln!(out, "[INSIGHTS] {}", report.message)?;
                    for point in &report.trend_data {
                        writeln!(out, "  {}: {} -> {}", point.metric, point.before, point.after)?;
                    }
                    for rec in &report.recommendations {
                        writeln!(out, "[RECOMMEND] {rec}")?;
                    }
                }
                Err(e) => writeln!(out, "[ERROR] {e}")?,
            },
        }
        Ok(true)
    }

    /// Drive the protocol over any line source.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        writeln!(out, "=== WellSync Headless Mode ===")?;
        writeln!(out, "Commands:")?;
        for line in HELP {
            writeln!(out, "{line}")?;
        }
        writeln!(out)?;
        if let Some(greeting) = self.companion.messages().first() {
            writeln!(out, "[AI] {}", greeting.text)?;
        }
        out.flush()?;

        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            tracing::debug!(target: "wellsync::headless", line, "Input");
            let keep_going = self.execute(parse_line(line), out)?;
            out.flush()?;
            if !keep_going {
                break;
            }
        }
        Ok(())
    }
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)
}

/// Run headless mode on stdin/stdout.
pub fn run_headless(json: bool) -> io::Result<()> {
    let mut session = HeadlessSession::new(json, StdRng::from_entropy());
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    session.run(stdin.lock(), &mut stdout)
}
