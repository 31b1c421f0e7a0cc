use crate::dom::{ElementBuilder, Markup};
use crate::state::Notification;

/// Alerta Bootstrap descartable
pub fn render_notification(notification: &Notification) -> Markup {
    ElementBuilder::new("div")
        .class("alert alert-dismissible fade show")
        .add_class(&format!("alert-{}", notification.kind.css_suffix()))
        .attr("role", "alert")
        .text(&notification.message)
        .child(
            ElementBuilder::new("button")
                .class("btn-close")
                .attr("type", "button")
                .attr("data-bs-dismiss", "alert")
                .build(),
        )
        .build()
}
