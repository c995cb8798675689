use crate::error::{CoutureError, CoutureResult};
use couture_models::MaterialsInput;
use validator::ValidationErrors;

pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages = Vec::new();

    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            let message = match (&error.message, &*error.code) {
                (Some(message), _) => message.to_string(),
                (None, "length") => format!("Length validation failed for field '{}'", field),
                (None, "range") => format!("Value out of range for field '{}'", field),
                (None, "required") => format!("Field '{}' is required", field),
                (None, code) => format!("Validation failed for field '{}': {}", field, code),
            };
            messages.push(message);
        }
    }

    messages.sort();
    messages.join(", ")
}

/// Request-size checks for a materials field. Absent materials always pass.
pub fn validate_materials(materials: Option<&MaterialsInput>) -> CoutureResult<()> {
    match materials {
        Some(input) => input
            .validate_limits()
            .map_err(|errors| CoutureError::validation("materials", format_validation_errors(&errors))),
        None => Ok(()),
    }
}

pub fn validate_batch_size(batch_size: usize, max_size: usize) -> CoutureResult<()> {
    if batch_size == 0 {
        return Err(CoutureError::validation("products", "Batch must contain at least one product"));
    }
    if batch_size > max_size {
        return Err(CoutureError::validation(
            "products",
            format!("Batch of {} products exceeds maximum of {}", batch_size, max_size),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use couture_models::{BomItem, StructuredBom, MAX_BOM_ITEMS};

    #[test]
    fn test_validate_materials_absent() {
        assert!(validate_materials(None).is_ok());
    }

    #[test]
    fn test_validate_materials_text_unbounded() {
        let text = MaterialsInput::Text("wool ".repeat(10_000));
        assert!(validate_materials(Some(&text)).is_ok());
    }

    #[test]
    fn test_validate_materials_too_many_items() {
        let bom = StructuredBom::new(vec![BomItem::default(); MAX_BOM_ITEMS + 1]);
        let err = validate_materials(Some(&MaterialsInput::Structured(bom))).unwrap_err();

        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert!(err.to_string().contains("at most 200 items"));
    }

    #[test]
    fn test_validate_batch_size() {
        assert!(validate_batch_size(1, 256).is_ok());
        assert!(validate_batch_size(256, 256).is_ok());
        assert!(validate_batch_size(0, 256).is_err());
        assert!(validate_batch_size(257, 256).is_err());
    }
}
