//! Message catalog for every user-facing string the form produces.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ParseError;
use crate::form::validation::{ErrorCode, Field};
use crate::models::Condition;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Es,
    En,
}

impl Locale {
    fn column(self) -> usize {
        match self {
            Locale::Es => 0,
            Locale::En => 1,
        }
    }
}

impl FromStr for Locale {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "es" => Ok(Locale::Es),
            "en" => Ok(Locale::En),
            other => Err(ParseError::UnknownLocale(other.to_string())),
        }
    }
}

/// Labels indexed by `Condition::ALL` position, then locale column
const CONDITION_LABELS: [[&str; 2]; 5] = [
    ["Nuevo", "New"],
    ["Como nuevo", "Like new"],
    ["Buen estado", "Good"],
    ["Usado", "Used"],
    ["Para piezas", "For parts"],
];

pub fn condition_label(locale: Locale, condition: Condition) -> &'static str {
    let row = match condition {
        Condition::New => 0,
        Condition::LikeNew => 1,
        Condition::Good => 2,
        Condition::Used => 3,
        Condition::ForParts => 4,
    };
    CONDITION_LABELS[row][locale.column()]
}

pub fn field_label(locale: Locale, field: Field) -> &'static str {
    let texts = match field {
        Field::Title => ["Título", "Title"],
        Field::Description => ["Descripción", "Description"],
        Field::Price => ["Precio", "Price"],
        Field::Location => ["Ubicación", "Location"],
        Field::CategoryId => ["Categoría", "Category"],
        Field::Condition => ["Condición", "Condition"],
        Field::OffersShipping => ["Ofrece envío", "Offers shipping"],
        Field::PriceNegotiable => ["Precio negociable", "Price negotiable"],
    };
    texts[locale.column()]
}

pub fn error_message(locale: Locale, code: ErrorCode) -> &'static str {
    let texts = match code {
        ErrorCode::TitleTooShort => [
            "El título debe tener al menos 3 caracteres",
            "Title must be at least 3 characters",
        ],
        ErrorCode::DescriptionTooShort => [
            "La descripción debe tener al menos 10 caracteres",
            "Description must be at least 10 characters",
        ],
        ErrorCode::PriceNegative => [
            "El precio no puede ser negativo",
            "Price cannot be negative",
        ],
        ErrorCode::PriceNotANumber => [
            "El precio debe ser un número",
            "Price must be a number",
        ],
        ErrorCode::LocationTooShort => [
            "La ubicación debe tener al menos 3 caracteres",
            "Location must be at least 3 characters",
        ],
        ErrorCode::CategoryRequired => [
            "Debes seleccionar una categoría",
            "You must select a category",
        ],
        ErrorCode::CategoryUnknown => [
            "La categoría seleccionada no existe",
            "The selected category does not exist",
        ],
    };
    texts[locale.column()]
}

/// Notifications the form can raise
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    ListingCreated,
    ListingFailed,
}

/// Title and description of a notice
pub fn notice_text(locale: Locale, notice: Notice) -> (&'static str, &'static str) {
    let texts = match notice {
        Notice::ListingCreated => [
            (
                "¡Anuncio creado!",
                "Tu anuncio ha sido publicado correctamente.",
            ),
            ("Listing created!", "Your listing has been published."),
        ],
        Notice::ListingFailed => [
            ("Error", "Ha ocurrido un error al crear el anuncio."),
            ("Error", "Something went wrong while creating the listing."),
        ],
    };
    texts[locale.column()]
}
