//! Pure per-tick logic of the typing engine
//!
//! `advance` looks at a script and a position and says what the next tick
//! does. It never touches a surface or a timer; the engine applies the
//! returned [`Step`].

use std::time::Duration;

use crate::config::EngineConfig;
use crate::script::Script;

/// Position inside a script: line index, then character index in that line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cursor {
    pub line: usize,
    pub ch: usize,
}

impl Cursor {
    pub const START: Cursor = Cursor { line: 0, ch: 0 };

    pub fn new(line: usize, ch: usize) -> Self {
        Self { line, ch }
    }
}

/// Fixed pauses that do not come from the script itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub line_pause: Duration,
    pub reveal_whole_pause: Duration,
    pub restart_pause: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            line_pause: Duration::from_millis(100),
            reveal_whole_pause: Duration::from_millis(500),
            restart_pause: Duration::from_millis(3000),
        }
    }
}

impl From<&EngineConfig> for Timings {
    fn from(config: &EngineConfig) -> Self {
        Self {
            line_pause: config.line_pause(),
            reveal_whole_pause: config.reveal_whole_pause(),
            // A zero restart pause would let a script with zero speeds spin forever
            restart_pause: config.restart_pause().max(Duration::from_millis(1)),
        }
    }
}

/// One unit of text to put on the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reveal<'a> {
    /// Entire line in one write
    Whole { line: usize, text: &'a str },
    /// Single character; `opens_line` when it is the first of its line
    Char {
        line: usize,
        ch: char,
        opens_line: bool,
        emphasize: bool,
    },
}

/// Outcome of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<'a> {
    /// Reveal a unit, move the cursor marker after it, tick again after `delay`
    Reveal {
        reveal: Reveal<'a>,
        next: Cursor,
        delay: Duration,
    },
    /// Current line is complete; move to the next one after `delay`
    NextLine { next: Cursor, delay: Duration },
    /// Past the last line: drop the cursor marker and restart after the pause
    Finished { restart_after: Duration },
}

/// Compute the tick at `at` for `script`
pub fn advance<'a>(script: &'a Script, at: Cursor, timings: &Timings) -> Step<'a> {
    let Some(line) = script.line(at.line) else {
        return Step::Finished {
            restart_after: timings.restart_pause,
        };
    };

    let next_line = Step::NextLine {
        next: Cursor::new(at.line + 1, 0),
        delay: timings.line_pause,
    };

    let len = line.char_len();
    if at.ch >= len {
        return next_line;
    }

    if line.reveal_whole {
        return Step::Reveal {
            reveal: Reveal::Whole {
                line: at.line,
                text: line.text(),
            },
            next: Cursor::new(at.line, len),
            delay: timings.reveal_whole_pause,
        };
    }

    let Some(ch) = line.char_at(at.ch) else {
        return next_line;
    };

    Step::Reveal {
        reveal: Reveal::Char {
            line: at.line,
            ch,
            opens_line: at.ch == 0,
            emphasize: line.emphasize,
        },
        next: Cursor::new(at.line, at.ch + 1),
        delay: line.speed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::LineRecord;

    fn script(lines: Vec<LineRecord>) -> Script {
        Script::new(lines)
    }

    /// Walk a script from the start until it finishes, collecting positions
    fn walk(script: &Script) -> Vec<Cursor> {
        let timings = Timings::default();
        let mut at = Cursor::START;
        let mut seen = vec![at];
        loop {
            match advance(script, at, &timings) {
                Step::Reveal { next, .. } | Step::NextLine { next, .. } => {
                    at = next;
                    seen.push(at);
                }
                Step::Finished { .. } => return seen,
            }
        }
    }

    #[test]
    fn test_first_char_opens_line() {
        let s = script(vec![LineRecord::typed("ab", 80)]);
        let step = advance(&s, Cursor::START, &Timings::default());
        assert_eq!(
            step,
            Step::Reveal {
                reveal: Reveal::Char {
                    line: 0,
                    ch: 'a',
                    opens_line: true,
                    emphasize: false,
                },
                next: Cursor::new(0, 1),
                delay: Duration::from_millis(80),
            }
        );

        let step = advance(&s, Cursor::new(0, 1), &Timings::default());
        assert!(matches!(
            step,
            Step::Reveal {
                reveal: Reveal::Char { ch: 'b', opens_line: false, .. },
                ..
            }
        ));
    }

    #[test]
    fn test_end_of_line_uses_line_pause() {
        let s = script(vec![LineRecord::typed("ab", 80), LineRecord::typed("c", 60)]);
        let step = advance(&s, Cursor::new(0, 2), &Timings::default());
        assert_eq!(
            step,
            Step::NextLine {
                next: Cursor::new(1, 0),
                delay: Duration::from_millis(100),
            }
        );
    }

    #[test]
    fn test_whole_line_jumps_to_end() {
        let s = script(vec![LineRecord::whole("function f() {}", 100)]);
        let step = advance(&s, Cursor::START, &Timings::default());
        assert_eq!(
            step,
            Step::Reveal {
                reveal: Reveal::Whole {
                    line: 0,
                    text: "function f() {}",
                },
                next: Cursor::new(0, 15),
                delay: Duration::from_millis(500),
            }
        );
    }

    #[test]
    fn test_past_last_line_finishes() {
        let s = script(vec![LineRecord::typed("a", 10)]);
        assert_eq!(
            advance(&s, Cursor::new(1, 0), &Timings::default()),
            Step::Finished {
                restart_after: Duration::from_millis(3000)
            }
        );
        assert!(matches!(
            advance(&Script::default(), Cursor::START, &Timings::default()),
            Step::Finished { .. }
        ));
    }

    #[test]
    fn test_empty_line_is_skipped() {
        let s = script(vec![LineRecord::typed("", 10), LineRecord::typed("x", 10)]);
        assert!(matches!(
            advance(&s, Cursor::START, &Timings::default()),
            Step::NextLine { .. }
        ));
    }

    #[test]
    fn test_multibyte_chars_reveal_whole_scalars() {
        let s = script(vec![LineRecord::emphasized("💬사", 80)]);
        let step = advance(&s, Cursor::new(0, 1), &Timings::default());
        assert!(matches!(
            step,
            Step::Reveal {
                reveal: Reveal::Char { ch: '사', emphasize: true, .. },
                ..
            }
        ));
    }

    #[test]
    fn test_positions_strictly_increase() {
        let s = script(vec![
            LineRecord::typed("ab", 80),
            LineRecord::whole("xyz", 100),
            LineRecord::emphasized("", 10),
            LineRecord::emphasized("q", 10),
        ]);
        let seen = walk(&s);
        assert!(seen.windows(2).all(|w| w[0] < w[1]), "{seen:?}");
        assert_eq!(seen.last(), Some(&Cursor::new(4, 0)));
    }

    #[test]
    fn test_timings_from_config() {
        let config = EngineConfig {
            restart_pause_ms: 0,
            line_pause_ms: 20,
            reveal_whole_pause_ms: 250,
        };
        let timings = Timings::from(&config);
        assert_eq!(timings.line_pause, Duration::from_millis(20));
        assert_eq!(timings.reveal_whole_pause, Duration::from_millis(250));
        assert_eq!(timings.restart_pause, Duration::from_millis(1));
    }
}
