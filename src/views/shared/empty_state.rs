use crate::dom::{icon, ElementBuilder, Markup};

/// Qué sugerir cuando no hay resultados
#[derive(Clone, Debug, PartialEq)]
pub enum EmptyHint {
    /// Probar otra búsqueda
    Search(&'static str),
    /// Ir al catálogo (texto de la pista y href del botón)
    Navigate { hint: &'static str, href: String, label: &'static str },
}

pub const EMPTY_STATE_CLASS: &str = "empty-state";

/// Tarjeta centrada de "sin resultados"
pub fn render_empty_state(icon_name: &str, title: &str, hint: &EmptyHint) -> Markup {
    let mut body = ElementBuilder::new("div")
        .class("card-body")
        .child(icon(icon_name, "display-1 text-muted mb-3"))
        .child(ElementBuilder::new("h4").class("text-muted").text(title).build());

    body = match hint {
        EmptyHint::Search(text) => {
            body.child(ElementBuilder::new("p").class("text-muted").text(text).build())
        }
        EmptyHint::Navigate { hint, href, label } => body
            .child(ElementBuilder::new("p").class("text-muted").text(hint).build())
            .child(
                ElementBuilder::new("a")
                    .class("btn btn-primary mt-3")
                    .attr("href", href)
                    .child(icon("book", "me-1"))
                    .text(label)
                    .build(),
            ),
    };

    ElementBuilder::new("div")
        .class("col-12")
        .child(
            ElementBuilder::new("div")
                .class("card border-0 text-center py-5")
                .add_class(EMPTY_STATE_CLASS)
                .child(body.build())
                .build(),
        )
        .build()
}
