//! Contact form field values

use serde::{Deserialize, Serialize};

use super::phone::format_phone;

/// Values of the contact form, serialized as the request body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// Addressable field of [`FormData`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Phone,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Phone,
        FormField::Message,
    ];

    /// HTML `name`/`id` attribute of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::Message => "message",
        }
    }

    /// Resolve an HTML `name` attribute; unknown names yield `None`
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(FormField::Name),
            "email" => Some(FormField::Email),
            "phone" => Some(FormField::Phone),
            "message" => Some(FormField::Message),
            _ => None,
        }
    }

    /// HTML input type used to render the field
    pub fn input_type(&self) -> &'static str {
        match self {
            FormField::Email => "email",
            FormField::Phone => "tel",
            FormField::Name | FormField::Message => "text",
        }
    }
}

impl FormData {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Message => &self.message,
        }
    }

    /// Store a raw input value. The phone field is reformatted, others are kept verbatim.
    pub fn apply_change(&mut self, field: FormField, raw: &str) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Phone => &mut self.phone,
            FormField::Message => &mut self.message,
        };

        *slot = match field {
            FormField::Phone => format_phone(raw),
            _ => raw.to_string(),
        };
    }

    /// Reset every field to an empty string
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        FormField::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_round_trips() {
        for field in FormField::ALL {
            assert_eq!(FormField::from_name(field.as_str()), Some(field));
        }
        assert_eq!(FormField::from_name("captcha"), None);
        assert_eq!(FormField::from_name("Phone"), None);
    }

    #[test]
    fn test_apply_change_formats_only_phone() {
        let mut data = FormData::default();

        data.apply_change(FormField::Phone, "5511968500353");
        data.apply_change(FormField::Name, "  Maria (Silva) 123 ");
        data.apply_change(FormField::Email, "maria@example.com");
        data.apply_change(FormField::Message, "Call me at 5511968500353");

        assert_eq!(data.phone, "+55 (11) 96850-0353");
        assert_eq!(data.name, "  Maria (Silva) 123 ");
        assert_eq!(data.email, "maria@example.com");
        assert_eq!(data.message, "Call me at 5511968500353");
    }

    #[test]
    fn test_apply_change_touches_one_field() {
        let mut data = FormData {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            phone: "+55 11".to_string(),
            message: "Hi".to_string(),
        };
        let before = data.clone();

        data.apply_change(FormField::Phone, "+55 115");

        assert_eq!(data.phone, "+55 (11) 5");
        assert_eq!(data.name, before.name);
        assert_eq!(data.email, before.email);
        assert_eq!(data.message, before.message);
    }

    #[test]
    fn test_last_write_wins() {
        let mut data = FormData::default();
        data.apply_change(FormField::Name, "A");
        data.apply_change(FormField::Name, "Ab");
        data.apply_change(FormField::Name, "Abc");
        assert_eq!(data.name, "Abc");
    }

    #[test]
    fn test_clear_and_is_empty() {
        let mut data = FormData::default();
        assert!(data.is_empty());

        data.apply_change(FormField::Message, "hello");
        assert!(!data.is_empty());

        data.clear();
        assert!(data.is_empty());
        assert_eq!(data, FormData::default());
    }

    #[test]
    fn test_serializes_with_field_names() {
        let data = FormData {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            phone: "+55 (11) 96850-0353".to_string(),
            message: "Olá".to_string(),
        };

        let json: serde_json::Value = serde_json::to_value(&data).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Ana",
                "email": "ana@example.com",
                "phone": "+55 (11) 96850-0353",
                "message": "Olá",
            })
        );
    }
}
