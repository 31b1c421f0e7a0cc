// ============================================================================
// CATALOG VIEW - Grid de libros
// ============================================================================

use crate::dom::{icon, ElementBuilder, Markup};
use crate::models::Book;
use crate::views::actions::{action_button, ActionKind};
use crate::views::shared::{badge, render_empty_state, EmptyHint};

pub const BOOK_CARD_CLASS: &str = "book-card";

/// Filtrado local de la búsqueda del catálogo
pub fn filter_books(books: &[Book], term: &str) -> Vec<Book> {
    books.iter().filter(|book| book.matches(term)).cloned().collect()
}

/// Renderizar grid de libros. Sin libros → estado vacío con pista de búsqueda.
pub fn render_books(books: &[Book]) -> Markup {
    if books.is_empty() {
        return render_empty_state(
            "book-x",
            "No se encontraron libros",
            &EmptyHint::Search("Intenta con otros términos de búsqueda"),
        );
    }
    Markup::concat(books.iter().map(render_book_card))
}

pub fn render_book_card(book: &Book) -> Markup {
    let available = book.is_available();

    let badges = ElementBuilder::new("div")
        .class("mb-2")
        .child(badge("bg-light text-dark me-1", &book.categoria))
        .child(badge(
            if available { "availability-badge available" } else { "availability-badge unavailable" },
            &format!("{} disponibles", book.ejemplares_disponibles),
        ))
        .build();

    let meta = ElementBuilder::new("div")
        .class("book-meta text-muted small mb-3")
        .child(meta_line("upc-scan", &format!("ISBN: {}", book.isbn)))
        .child(meta_line("calendar", &format!("Año: {}", book.anio_publicacion)))
        .child(meta_line("building", &book.editorial))
        .build();

    // ambos botones se deshabilitan sin ejemplares
    let actions = ElementBuilder::new("div")
        .class("book-actions d-grid gap-2")
        .child(action_button(ActionKind::Reserve, book.id, "btn btn-primary btn-sm", "calendar-plus", "Reservar", available))
        .child(action_button(ActionKind::Loan, book.id, "btn btn-success btn-sm", "arrow-left-right", "Prestar", available))
        .build();

    let body = ElementBuilder::new("div")
        .class("card-body")
        .child(ElementBuilder::new("h5").class("card-title fw-bold text-primary").text(&book.titulo).build())
        .child(badges)
        .child(meta)
        .child(actions)
        .build();

    ElementBuilder::new("div")
        .class("col-md-6 col-lg-4 col-xl-3")
        .child(
            ElementBuilder::new("div")
                .class("card h-100")
                .add_class(BOOK_CARD_CLASS)
                .attr("data-book-id", &book.id.to_string())
                .child(body)
                .build(),
        )
        .build()
}

fn meta_line(icon_name: &str, text: &str) -> Markup {
    ElementBuilder::new("div")
        .child(icon(icon_name, "me-1"))
        .text(text)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::shared::EMPTY_STATE_CLASS;

    fn book(id: i64, titulo: &str, disponibles: u32) -> Book {
        Book {
            id,
            titulo: titulo.to_string(),
            autor_id: None,
            categoria: "ficcion".into(),
            isbn: "978-0".into(),
            anio_publicacion: 1967,
            editorial: "Sudamericana".into(),
            ejemplares_disponibles: disponibles,
            ejemplares_totales: Some(3),
        }
    }

    #[test]
    fn unavailable_book_disables_both_actions() {
        let markup = render_book_card(&book(1, "Rayuela", 0));
        assert_eq!(markup.count(" disabled>"), 2);
        assert!(markup.contains("unavailable"));
    }

    #[test]
    fn available_book_enables_both_actions() {
        let markup = render_book_card(&book(1, "Rayuela", 2));
        assert_eq!(markup.count(" disabled"), 0);
        assert!(markup.contains("data-action=\"reserve\""));
        assert!(markup.contains("data-action=\"loan\""));
        assert!(markup.contains("2 disponibles"));
    }

    #[test]
    fn one_card_per_book_or_empty_state() {
        let books = vec![book(1, "Rayuela", 1), book(2, "Ficciones", 0)];
        assert_eq!(render_books(&books).count("data-book-id="), 2);

        let empty = render_books(&[]);
        assert!(empty.contains(EMPTY_STATE_CLASS));
        assert!(empty.contains("No se encontraron libros"));
        assert!(empty.contains("términos de búsqueda"));
    }

    #[test]
    fn filter_matches_title_category_or_publisher() {
        let books = vec![book(1, "Rayuela", 1), book(2, "Ficciones", 0)];
        assert_eq!(filter_books(&books, "FIC").len(), 2);
        assert_eq!(filter_books(&books, "rayu").len(), 1);
        assert_eq!(filter_books(&books, "").len(), 2);
        assert!(filter_books(&books, "poesía").is_empty());
    }
}
