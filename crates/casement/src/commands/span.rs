use clap::Args;

use casement_core::{Rect, span_work_areas};

/// Arguments for the `span` subcommand.
#[derive(Args)]
pub struct SpanArgs {
    /// Work area as x,y,width,height (repeat once per display; defaults
    /// to the attached displays)
    #[arg(long = "work-area", value_name = "X,Y,W,H", allow_hyphen_values = true)]
    work_areas: Vec<Rect>,
}

pub fn execute(args: &SpanArgs) {
    let areas = super::work_areas_or_live(&args.work_areas);

    match span_work_areas(&areas) {
        Some(rect) => println!("{rect}"),
        None => {
            eprintln!(
                "Cannot span: need at least two displays, got {}.",
                areas.len()
            );
            std::process::exit(1);
        }
    }
}
