//! `#[query(...)]` field attributes.
//!
//! Accepted forms, comma separated inside one or more `query` attributes:
//! a kind (`text`, `number`, `date`, `choice`), `skip`, and
//! `rename = "..."`.

use proc_macro2::Span;
use syn::meta::ParseNestedMeta;
use syn::{Attribute, Error, LitStr, Result};

const KINDS: &str = "text, number, date, choice";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    Date,
    Choice,
}

impl FieldKind {
    fn named(name: &str) -> Option<Self> {
        Some(match name {
            "text" => FieldKind::Text,
            "number" => FieldKind::Number,
            "date" => FieldKind::Date,
            "choice" => FieldKind::Choice,
            _ => return None,
        })
    }
}

/// Everything the `query` attributes of one field declare.
#[derive(Debug, Clone, Default)]
pub struct QueryAttr {
    pub kind: Option<FieldKind>,
    pub skip: bool,
    pub rename: Option<String>,
    kind_span: Option<Span>,
}

impl QueryAttr {
    /// The kind to expose the field as, unless it is skipped or unmarked.
    pub fn exposed_kind(&self) -> Option<FieldKind> {
        self.kind.filter(|_| !self.skip)
    }

    fn apply(&mut self, meta: ParseNestedMeta) -> Result<()> {
        if meta.path.is_ident("skip") {
            self.skip = true;
            return Ok(());
        }
        if meta.path.is_ident("rename") {
            let name: LitStr = meta
                .value()?
                .parse()
                .map_err(|e| Error::new(e.span(), "rename must be a string literal"))?;
            self.rename = Some(name.value());
            return Ok(());
        }

        let Some(ident) = meta.path.get_ident() else {
            return Err(meta.error(format!("expected one of {KINDS}, skip, rename")));
        };
        let Some(kind) = FieldKind::named(&ident.to_string()) else {
            return Err(meta.error(format!(
                "unknown query field kind `{ident}`, expected one of {KINDS}"
            )));
        };
        if self.kind.is_some() {
            return Err(meta.error("field kind given more than once"));
        }
        self.kind = Some(kind);
        self.kind_span = Some(ident.span());
        Ok(())
    }
}

/// Collects every `#[query(...)]` on a field into one [`QueryAttr`].
pub fn parse_query_attrs(attrs: &[Attribute]) -> Result<QueryAttr> {
    let mut parsed = QueryAttr::default();
    for attr in attrs.iter().filter(|a| a.path().is_ident("query")) {
        attr.parse_nested_meta(|meta| parsed.apply(meta))?;
    }

    match parsed.kind_span {
        Some(span) if parsed.skip => Err(Error::new(span, "a skipped field cannot declare a kind")),
        _ => Ok(parsed),
    }
}
