use crate::error::MenuError;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Render a top-level error and its cause chain for the terminal
pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        ColoredText::error(err.to_string()).bold().render(supports_color)
    );

    let arrow = Icon::Arrow.colored(supports_color, supports_unicode);
    for cause in err.chain().skip(1) {
        out.push_str(&format!("  {} {}\n", arrow, cause));
    }

    if let Some(hint) = err.downcast_ref::<MenuError>().and_then(hint_for) {
        out.push_str(&format!(
            "  {}\n",
            ColoredText::dim(hint).render(supports_color)
        ));
    }

    out
}

fn hint_for(err: &MenuError) -> Option<&'static str> {
    match err {
        MenuError::InvalidStructure { .. } | MenuError::RootAction => {
            Some("A menu is either an action or a list of submenus, never both.")
        }
        MenuError::InvalidConfig { .. } => Some("Fix the file or run without --config."),
        MenuError::ActionFailed { .. } => {
            Some("The session ended because an operation failed; start it again to continue.")
        }
        MenuError::Io(_) => None,
    }
}

pub fn print_error(err: &anyhow::Error, ui: &UiContext) {
    if ui.json {
        let output = serde_json::json!({
            "event": "error",
            "message": err.to_string(),
        });
        let _ = crate::ui::json::emit(output);
        return;
    }

    eprint!("{}", format_error(err, ui.color, ui.unicode));
}
