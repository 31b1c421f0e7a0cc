// ============================================================================
// ELEMENT BUILDER - Builder pattern para armar HTML escapado
// ============================================================================
// Las vistas son puras: construyen `Markup` (texto HTML) y es la página la
// que lo vuelca en su slot. Todo texto pasa por `escape`.
// ============================================================================

use std::fmt;

/// Fragmento HTML ya escapado
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    pub fn empty() -> Self {
        Self(String::new())
    }

    /// Une fragmentos en orden
    pub fn concat(parts: impl IntoIterator<Item = Markup>) -> Self {
        Self(parts.into_iter().map(|m| m.0).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Cuenta apariciones de un trozo (útil para verificar listados)
    pub fn count(&self, needle: &str) -> usize {
        self.0.matches(needle).count()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.0.contains(needle)
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub struct ElementBuilder {
    tag: String,
    class: String,
    attrs: Vec<(String, Option<String>)>,
    children: Vec<Markup>,
}

impl ElementBuilder {
    /// Crear nuevo builder para un elemento
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            class: String::new(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Establecer class name (reemplaza todas las clases)
    pub fn class(mut self, class: &str) -> Self {
        self.class = class.to_string();
        self
    }

    /// Agregar clases adicionales (sin reemplazar)
    pub fn add_class(mut self, class: &str) -> Self {
        if !class.is_empty() {
            if !self.class.is_empty() {
                self.class.push(' ');
            }
            self.class.push_str(class);
        }
        self
    }

    /// Establecer atributo
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.push((name.to_string(), Some(value.to_string())));
        self
    }

    /// Atributo booleano (`disabled`, `hidden`...) presente solo si `on`
    pub fn flag(mut self, name: &str, on: bool) -> Self {
        if on {
            self.attrs.push((name.to_string(), None));
        }
        self
    }

    /// Agregar texto (escapado)
    pub fn text(mut self, text: &str) -> Self {
        self.children.push(Markup(escape(text)));
        self
    }

    /// Agregar hijo
    pub fn child(mut self, child: Markup) -> Self {
        self.children.push(child);
        self
    }

    /// Construir y retornar el HTML
    pub fn build(self) -> Markup {
        let mut html = format!("<{}", self.tag);
        if !self.class.is_empty() {
            html.push_str(&format!(" class=\"{}\"", escape(&self.class)));
        }
        for (name, value) in &self.attrs {
            match value {
                Some(value) => html.push_str(&format!(" {}=\"{}\"", name, escape(value))),
                None => html.push_str(&format!(" {}", name)),
            }
        }
        html.push('>');
        for child in self.children {
            html.push_str(child.as_str());
        }
        html.push_str(&format!("</{}>", self.tag));
        Markup(html)
    }
}

/// Icono de Bootstrap Icons (`bi-*`)
pub fn icon(name: &str, extra: &str) -> Markup {
    ElementBuilder::new("i")
        .class(&format!("bi bi-{}", name))
        .add_class(extra)
        .build()
}
