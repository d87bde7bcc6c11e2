use validator::Validate;

use crate::i18n::{self, Locale};
use crate::models::{Category, ListingDraft};

/// Draft fields, in the order the form lays them out
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Title,
    Description,
    Price,
    Location,
    CategoryId,
    Condition,
    OffersShipping,
    PriceNegotiable,
}

impl Field {
    /// Key of the field in the request body
    pub fn name(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Description => "description",
            Field::Price => "price",
            Field::Location => "location",
            Field::CategoryId => "categoryId",
            Field::Condition => "condition",
            Field::OffersShipping => "offersShipping",
            Field::PriceNegotiable => "priceNegotiable",
        }
    }

    /// Rule declared on the draft for this field, if any
    fn derived_rule(self) -> Option<ErrorCode> {
        match self {
            Field::Title => Some(ErrorCode::TitleTooShort),
            Field::Description => Some(ErrorCode::DescriptionTooShort),
            Field::Price => Some(ErrorCode::PriceNegative),
            Field::Location => Some(ErrorCode::LocationTooShort),
            _ => None,
        }
    }

    fn from_rule_key(key: &str) -> Option<Field> {
        match key {
            "title" => Some(Field::Title),
            "description" => Some(Field::Description),
            "price" => Some(Field::Price),
            "location" => Some(Field::Location),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    TitleTooShort,
    DescriptionTooShort,
    PriceNegative,
    PriceNotANumber,
    LocationTooShort,
    CategoryRequired,
    CategoryUnknown,
}

impl ErrorCode {
    pub fn field(self) -> Field {
        match self {
            ErrorCode::TitleTooShort => Field::Title,
            ErrorCode::DescriptionTooShort => Field::Description,
            ErrorCode::PriceNegative | ErrorCode::PriceNotANumber => Field::Price,
            ErrorCode::LocationTooShort => Field::Location,
            ErrorCode::CategoryRequired | ErrorCode::CategoryUnknown => Field::CategoryId,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub code: ErrorCode,
}

impl FieldError {
    fn new(code: ErrorCode) -> Self {
        Self {
            field: code.field(),
            code,
        }
    }

    pub fn message(&self, locale: Locale) -> &'static str {
        i18n::error_message(locale, self.code)
    }
}

/// Field-scoped validation failures, at most one per field, in layout order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<FieldError>,
}

impl ValidationReport {
    fn from_errors(mut errors: Vec<FieldError>) -> Self {
        errors.sort_by_key(|e| e.field);
        errors.dedup_by_key(|e| e.field);
        Self { errors }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn for_field(&self, field: Field) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field)
    }

    pub fn contains(&self, code: ErrorCode) -> bool {
        self.errors.iter().any(|e| e.code == code)
    }

    /// Localized message per failing field
    pub fn messages(&self, locale: Locale) -> Vec<(Field, &'static str)> {
        self.errors
            .iter()
            .map(|e| (e.field, e.message(locale)))
            .collect()
    }

    pub(crate) fn clear_field(&mut self, field: Field) {
        self.errors.retain(|e| e.field != field);
    }
}

/// Check a draft against the listing schema and the supplied categories
pub fn validate_draft(draft: &ListingDraft, categories: &[Category]) -> ValidationReport {
    let mut errors = Vec::new();

    if let Err(failures) = draft.validate() {
        for key in failures.field_errors().keys() {
            if let Some(code) = Field::from_rule_key(key).and_then(Field::derived_rule) {
                errors.push(FieldError::new(code));
            }
        }
    }

    // Range rules let NaN and infinities through
    if !draft.price.is_finite() {
        errors.retain(|e: &FieldError| e.field != Field::Price);
        errors.push(FieldError::new(ErrorCode::PriceNotANumber));
    }

    if draft.category_id.is_empty() {
        errors.push(FieldError::new(ErrorCode::CategoryRequired));
    } else if !categories.iter().any(|c| c.id == draft.category_id) {
        errors.push(FieldError::new(ErrorCode::CategoryUnknown));
    }

    ValidationReport::from_errors(errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories() -> Vec<Category> {
        vec![
            Category {
                id: "cat-electronics".to_string(),
                name: "Electrónica".to_string(),
                slug: "electronica".to_string(),
            },
            Category {
                id: "cat-home".to_string(),
                name: "Hogar".to_string(),
                slug: "hogar".to_string(),
            },
        ]
    }

    fn valid_draft() -> ListingDraft {
        ListingDraft {
            title: "iPhone 12 Pro".to_string(),
            description: "Poco uso, batería al 90%".to_string(),
            price: 450.0,
            location: "Madrid".to_string(),
            category_id: "cat-electronics".to_string(),
            ..ListingDraft::default()
        }
    }

    #[test]
    fn valid_draft_passes() {
        let report = validate_draft(&valid_draft(), &categories());
        assert!(report.is_valid());
    }

    #[test]
    fn short_title_is_reported_on_title() {
        for title in ["", "a", "ab"] {
            let draft = ListingDraft {
                title: title.to_string(),
                ..valid_draft()
            };

            let report = validate_draft(&draft, &categories());

            assert_eq!(report.len(), 1);
            assert_eq!(
                report.for_field(Field::Title).map(|e| e.code),
                Some(ErrorCode::TitleTooShort)
            );
        }
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        let draft = ListingDraft {
            title: "ñé".to_string(),
            location: "Ávila".to_string(),
            ..valid_draft()
        };

        let report = validate_draft(&draft, &categories());

        assert!(report.contains(ErrorCode::TitleTooShort));
        assert!(report.for_field(Field::Location).is_none());
    }

    #[test]
    fn negative_price_is_rejected() {
        let draft = ListingDraft {
            price: -0.01,
            ..valid_draft()
        };

        let report = validate_draft(&draft, &categories());

        assert_eq!(
            report.errors(),
            &[FieldError {
                field: Field::Price,
                code: ErrorCode::PriceNegative,
            }]
        );
    }

    #[test]
    fn zero_price_is_allowed() {
        let draft = ListingDraft {
            price: 0.0,
            ..valid_draft()
        };
        assert!(validate_draft(&draft, &categories()).is_valid());
    }

    #[test]
    fn non_finite_price_is_not_a_number() {
        for price in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let draft = ListingDraft {
                price,
                ..valid_draft()
            };

            let report = validate_draft(&draft, &categories());

            assert_eq!(report.len(), 1);
            assert!(report.contains(ErrorCode::PriceNotANumber));
        }
    }

    #[test]
    fn category_must_be_selected_and_known() {
        let missing = ListingDraft {
            category_id: String::new(),
            ..valid_draft()
        };
        let unknown = ListingDraft {
            category_id: "cat-cars".to_string(),
            ..valid_draft()
        };

        assert!(validate_draft(&missing, &categories()).contains(ErrorCode::CategoryRequired));
        assert!(validate_draft(&unknown, &categories()).contains(ErrorCode::CategoryUnknown));
        assert!(validate_draft(&valid_draft(), &[]).contains(ErrorCode::CategoryUnknown));
    }

    #[test]
    fn empty_draft_reports_every_field_in_layout_order() {
        let report = validate_draft(&ListingDraft::default(), &categories());

        let fields: Vec<_> = report.errors().iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                Field::Title,
                Field::Description,
                Field::Location,
                Field::CategoryId,
            ]
        );
    }

    #[test]
    fn messages_are_localized() {
        let draft = ListingDraft {
            description: "corta".to_string(),
            ..valid_draft()
        };
        let report = validate_draft(&draft, &categories());

        assert_eq!(
            report.messages(Locale::Es),
            vec![(
                Field::Description,
                "La descripción debe tener al menos 10 caracteres"
            )]
        );
        assert_eq!(
            report.messages(Locale::En),
            vec![(Field::Description, "Description must be at least 10 characters")]
        );
    }

    #[test]
    fn clearing_a_field_keeps_the_others() {
        let mut report = validate_draft(&ListingDraft::default(), &categories());

        report.clear_field(Field::Title);

        assert!(report.for_field(Field::Title).is_none());
        assert!(report.for_field(Field::Description).is_some());
    }
}
