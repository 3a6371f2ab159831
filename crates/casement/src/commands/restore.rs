use clap::Args;

use casement_core::{Rect, RestorePlan, WindowState, plan_restore};

/// Arguments for the `restore` subcommand.
#[derive(Args)]
pub struct RestoreArgs {
    /// Saved bounds as x,y,width,height
    #[arg(long, value_name = "X,Y,W,H", allow_hyphen_values = true)]
    rect: Rect,
    /// Saved window state: normal, minimized or maximized
    #[arg(long, default_value = "normal")]
    state: WindowState,
    /// Work area as x,y,width,height (repeat once per display; defaults
    /// to the attached displays)
    #[arg(long = "work-area", value_name = "X,Y,W,H", allow_hyphen_values = true)]
    work_areas: Vec<Rect>,
}

pub fn execute(args: &RestoreArgs) {
    let areas = super::work_areas_or_live(&args.work_areas);
    println!("{}", describe(plan_restore(args.rect, &areas), args.state));
}

fn describe(plan: RestorePlan, state: WindowState) -> String {
    let state = match state {
        WindowState::Minimized => WindowState::Normal,
        other => other,
    };
    match plan {
        RestorePlan::Exact(rect) => format!("exact {rect}, then {state}"),
        RestorePlan::DefaultLocation {
            size: Some((w, h)),
        } => format!("default location, size {w}x{h}"),
        RestorePlan::DefaultLocation { size: None } => "default location and size".to_string(),
    }
}
