use crate::reports;
use clap::Args;
use neff::config::MeasurementArgs;
use neff::error::NeffResult;
use neff::reference;
use neff::session::{FormCommand, Session};
use std::io::{BufRead, Write};
use tracing::debug;

#[derive(Args, Debug, Clone)]
pub struct InteractiveArgs {
    /// Starting values; `reset` always goes back to the ideals
    #[command(flatten)]
    pub measurements: MeasurementArgs,
}

const HELP: &str = "\
Commands:
  show                      Show the current measurements and result
  set <field> <value>       Edit a width (max-incisor, max-canine, mand-incisor, mand-canine)
  calculate | calc          Compute the anterior coefficient
  reset                     Restore the ideal values and clear the result
  info                      Show the reference panel
  help                      Show this list
  quit | exit               Leave";

pub fn run<R: BufRead, W: Write>(args: InteractiveArgs, input: R, mut out: W) -> NeffResult<()> {
    let mut session = Session::with_measurements(args.measurements.into());

    writeln!(out, "{}", reference::TITLE)?;
    writeln!(out, "{}", reference::SUBTITLE)?;
    writeln!(out, "Type 'help' for commands.")?;
    render_form(&session, &mut out)?;

    let mut lines = input.lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line?;
        debug!("prompt: {:?}", line);

        let cmd = match line.parse::<FormCommand>() {
            Ok(cmd) => cmd,
            Err(e) => {
                writeln!(out, "Error: {}", e)?;
                continue;
            }
        };

        match cmd {
            FormCommand::Quit => break,
            FormCommand::Help => writeln!(out, "{}", HELP)?,
            FormCommand::Info => writeln!(out, "{}", reports::reference_panel())?,
            FormCommand::Show => render_form(&session, &mut out)?,
            FormCommand::Reset => {
                session.reset();
                render_form(&session, &mut out)?;
            }
            FormCommand::Set(field, text) => match session.set_field(field, &text) {
                Ok(value) => writeln!(out, "{} = {}", field.label(), value)?,
                Err(e) => writeln!(out, "Error: {}", e)?,
            },
            FormCommand::Calculate => match session.calculate() {
                Ok(result) => writeln!(out, "{}", reports::result_table(result))?,
                Err(e) => writeln!(out, "Error: {}", e)?,
            },
        }
    }
    Ok(())
}

fn render_form<W: Write>(session: &Session, out: &mut W) -> NeffResult<()> {
    let set = session.measurements();
    writeln!(out, "{}", reports::measurement_table(set))?;
    for note in reports::range_notes(set, &set.out_of_range()) {
        writeln!(out, "{}", note)?;
    }
    match session.display() {
        Some(result) => writeln!(out, "{}", reports::result_table(result))?,
        None => writeln!(out, "No result. Type 'calculate'.")?,
    }
    Ok(())
}
