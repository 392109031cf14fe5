//! Line-oriented terminal renderer for the questionnaire.
//!
//! A [`Session`] walks a [`Wizard`] through its screens, reading one line of
//! input at a time. It is generic over its reader and writer so the whole
//! flow can be driven from memory in tests.
//!
//! Keys on every step: `Enter` continues, `b` goes back, `q` quits. At a
//! field prompt an empty line keeps the shown answer and `-` clears it. On
//! the results screen `n` starts a new analysis. End of input quits.

use std::io::{self, BufRead, Write};

use tracing::debug;
use venture_core::{ScoringResult, Transition, Wizard, WizardStep};

use crate::form::{FieldDescriptor, FieldKind, StepForm, form_for};
use crate::report::Report;

/// Typed at a field prompt to clear its answer.
const CLEAR_INPUT: &str = "-";

/// Whether the session keeps going after a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// An interactive questionnaire over a reader/writer pair.
pub struct Session<R, W> {
    input: R,
    output: W,
    wizard: Wizard,
    last_result: Option<ScoringResult>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(
        input: R,
        output: W,
        wizard: Wizard,
    ) -> Self {
        Self {
            input,
            output,
            wizard,
            last_result: None,
        }
    }

    pub fn wizard(&self) -> &Wizard {
        &self.wizard
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until the user quits or input ends.
    ///
    /// Returns the most recent scoring result, which survives a later
    /// "new analysis".
    pub fn run(&mut self) -> io::Result<Option<ScoringResult>> {
        loop {
            let flow = match self.wizard.step() {
                WizardStep::Welcome => self.welcome()?,
                WizardStep::Results => self.results()?,
                step => match form_for(step) {
                    Some(form) => self.step_screen(form)?,
                    None => Flow::Quit,
                },
            };
            if flow == Flow::Quit {
                break;
            }
        }
        debug!(scored = self.last_result.is_some(), "wizard session finished");
        Ok(self.last_result.clone())
    }

    // ─── screens ───

    fn welcome(&mut self) -> io::Result<Flow> {
        writeln!(self.output, "Venture Analyst")?;
        writeln!(self.output, "===============")?;
        writeln!(
            self.output,
            "Five short steps about your business idea, then a viability score out of 100."
        )?;
        writeln!(self.output)?;
        write!(self.output, "Press Enter to start, q to quit: ")?;
        self.output.flush()?;

        match self.read_line()? {
            None => Ok(Flow::Quit),
            Some(line) if line.eq_ignore_ascii_case("q") => Ok(Flow::Quit),
            Some(_) => {
                self.wizard.advance();
                Ok(Flow::Continue)
            }
        }
    }

    fn step_screen(
        &mut self,
        form: &StepForm,
    ) -> io::Result<Flow> {
        let number = form.step.number().unwrap_or(0);
        writeln!(self.output)?;
        writeln!(
            self.output,
            "── Step {number} of {} · {}% ──",
            venture_core::DATA_STEPS,
            self.wizard.progress_percent().normalize()
        )?;
        writeln!(self.output, "{}", form.title)?;

        for field in form.fields {
            if self.ask_field(field)? == Flow::Quit {
                return Ok(Flow::Quit);
            }
        }
        self.navigate()
    }

    fn results(&mut self) -> io::Result<Flow> {
        if let Some(result) = self.wizard.result() {
            writeln!(self.output)?;
            writeln!(
                self.output,
                "{}",
                Report::new(result).with_answers(self.wizard.answers())
            )?;
        }

        loop {
            writeln!(self.output)?;
            write!(self.output, "[n] new analysis  [q] quit: ")?;
            self.output.flush()?;

            match self.read_line()?.as_deref() {
                None | Some("q") | Some("Q") => return Ok(Flow::Quit),
                Some("n") | Some("N") => {
                    self.wizard.reset();
                    return Ok(Flow::Continue);
                }
                Some(other) => writeln!(self.output, "Unrecognised command '{other}'.")?,
            }
        }
    }

    // ─── input ───

    /// Asks for one field. An empty line keeps the current answer and
    /// [`CLEAR_INPUT`] removes it.
    fn ask_field(
        &mut self,
        field: &FieldDescriptor,
    ) -> io::Result<Flow> {
        writeln!(self.output)?;
        if let FieldKind::Choice(options) = field.kind {
            for (idx, option) in options.iter().enumerate() {
                writeln!(self.output, "  {}) {}", idx + 1, option.label)?;
            }
        }

        loop {
            let current = self.wizard.answers().get(field.id).map(str::to_string);
            match (&current, field.placeholder) {
                (Some(value), _) => write!(
                    self.output,
                    "{} [{value}, {CLEAR_INPUT} to clear]: ",
                    field.label
                )?,
                (None, Some(example)) => write!(self.output, "{} (e.g. {example}): ", field.label)?,
                (None, None) => write!(self.output, "{}: ", field.label)?,
            }
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(Flow::Quit);
            };
            if line.is_empty() {
                return Ok(Flow::Continue);
            }
            if line == CLEAR_INPUT {
                self.wizard.clear_answer(field.id);
                return Ok(Flow::Continue);
            }
            match field.kind.resolve_input(&line) {
                Some(value) => {
                    self.wizard.set_answer(field.id, value);
                    return Ok(Flow::Continue);
                }
                None => writeln!(self.output, "Unknown option '{line}'.")?,
            }
        }
    }

    /// Prompts for the next move after a step's fields.
    fn navigate(&mut self) -> io::Result<Flow> {
        loop {
            write!(self.output, "[Enter] next  [b] back  [q] quit: ")?;
            self.output.flush()?;

            match self.read_line()?.as_deref() {
                None | Some("q") | Some("Q") => return Ok(Flow::Quit),
                Some("") => {
                    if let Transition::Scored(result) = self.wizard.advance() {
                        self.last_result = Some(result);
                    }
                    return Ok(Flow::Continue);
                }
                Some("b") | Some("B") => {
                    if self.wizard.can_retreat() {
                        self.wizard.retreat();
                        return Ok(Flow::Continue);
                    }
                    writeln!(self.output, "This is the first step.")?;
                }
                Some(other) => writeln!(self.output, "Unrecognised command '{other}'.")?,
            }
        }
    }

    /// Next input line without its line ending and surrounding spaces, or
    /// `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;
    use venture_core::{AnswerSet, FieldId, Rating};

    fn run_session(script: &str) -> (Option<ScoringResult>, Wizard, String) {
        let mut session = Session::new(Cursor::new(script.to_string()), Vec::new(), Wizard::new());
        let result = session.run().expect("in-memory io cannot fail");
        let wizard = session.wizard().clone();
        let output = String::from_utf8(session.into_output()).expect("output is utf-8");
        (result, wizard, output)
    }

    // Welcome, then the street coffee answers step by step.
    const STREET_COFFEE: &str = "\n\
Coffee at a street kiosk\n1\n\n\
\n\n\n\
5\n1.5\n\n\
1500\n2\n\n\
500\n1000\n\n";

    // =========================================================================
    // Full walk-through
    // =========================================================================

    #[test]
    fn full_session_scores_the_answers() {
        let (result, wizard, output) = run_session(&format!("{STREET_COFFEE}q\n"));

        let result = result.expect("step 5 was submitted");
        assert_eq!(result.score, 93);
        assert_eq!(result.rating, Rating::Excellent);
        assert_eq!(wizard.step(), WizardStep::Results);
        assert_eq!(wizard.answers().get(FieldId::BusinessType), Some("street"));
        assert!(output.contains("⭐ 93/100  EXCELLENT"), "{output}");
        assert!(output.contains("Idea:            Coffee at a street kiosk"));
    }

    #[test]
    fn step_headers_show_position_and_progress() {
        let (_, _, output) = run_session(STREET_COFFEE);

        assert!(output.contains("── Step 1 of 5 · 20% ──\nWhat are you selling?"));
        assert!(output.contains("── Step 3 of 5 · 60% ──\nUnit economics"));
        assert!(output.contains("── Step 5 of 5 · 100% ──"));
    }

    #[test]
    fn prompts_show_placeholders_and_choices() {
        let (_, _, output) = run_session(STREET_COFFEE);

        assert!(output.contains("Price (EUR) (e.g. 5): "));
        assert!(output.contains("  1) 🏪 Street vending\n  2) 🏬 Retail shop"));
        assert!(output.contains("Business type: "));
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    #[test]
    fn back_returns_to_previous_step_and_keeps_answers() {
        // Step 1, step 2, back to step 1 keeping both answers, then quit.
        let script = "\nLemonade\n2\n\nstudents\n\nb\n\n\nq\n";
        let (result, wizard, output) = run_session(script);

        assert_eq!(result, None);
        assert_eq!(wizard.step(), WizardStep::Step1);
        assert_eq!(wizard.answers().get(FieldId::ProductName), Some("Lemonade"));
        assert_eq!(wizard.answers().get(FieldId::BusinessType), Some("shop"));
        assert!(output.contains("Product description [Lemonade, - to clear]: "));
    }

    #[test]
    fn dash_clears_a_previous_answer() {
        // Fill step 1, go forward, come back and clear the product name.
        let script = "\nLemonade\n2\n\n\n\nb\n-\n\nq\n";
        let (_, wizard, _) = run_session(script);

        assert_eq!(wizard.step(), WizardStep::Step1);
        assert_eq!(wizard.answers().get(FieldId::ProductName), None);
        assert_eq!(wizard.answers().get(FieldId::BusinessType), Some("shop"));
    }

    #[test]
    fn back_on_first_step_is_refused() {
        let (_, wizard, output) = run_session("\n\n\nb\nq\n");

        assert_eq!(wizard.step(), WizardStep::Step1);
        assert!(output.contains("This is the first step."));
    }

    #[test]
    fn unknown_navigation_command_reprompts() {
        let (_, wizard, output) = run_session("\n\n\nx\n\nq\n");

        assert!(output.contains("Unrecognised command 'x'."));
        assert_eq!(wizard.step(), WizardStep::Step2);
    }

    #[test]
    fn invalid_choice_asks_again() {
        let (_, wizard, output) = run_session("\nKiosk\n9\nonline\nq\n");

        assert!(output.contains("Unknown option '9'."));
        assert_eq!(wizard.answers().get(FieldId::BusinessType), Some("online"));
    }

    // =========================================================================
    // Quitting and restarting
    // =========================================================================

    #[test]
    fn quit_on_welcome_leaves_wizard_untouched() {
        let (result, wizard, _) = run_session("q\n");

        assert_eq!(result, None);
        assert_eq!(wizard.step(), WizardStep::Welcome);
    }

    #[test]
    fn end_of_input_quits_mid_questionnaire() {
        let (result, wizard, _) = run_session("\nCoffee\n");

        assert_eq!(result, None);
        assert_eq!(wizard.step(), WizardStep::Step1);
        assert_eq!(wizard.answers().get(FieldId::ProductName), Some("Coffee"));
    }

    #[test]
    fn new_analysis_resets_but_keeps_last_result() {
        let (result, wizard, output) = run_session(&format!("{STREET_COFFEE}n\nq\n"));

        assert_eq!(result.map(|r| r.score), Some(93));
        assert_eq!(wizard.step(), WizardStep::Welcome);
        assert_eq!(wizard.answers(), &AnswerSet::new());
        assert_eq!(output.matches("Venture Analyst").count(), 2);
    }
}
