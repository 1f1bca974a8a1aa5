//! Display-state stand-ins for the host runtime's text components.

/// One on-screen text field. Binders own their fields and overwrite them in
/// place; readers see the latest published value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    text: String,
}

impl TextField {
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_overwrites_previous_value() {
        let mut field = TextField::default();
        assert_eq!(field.text(), "");
        field.set("72°F");
        field.set("Unavailable");
        assert_eq!(field.text(), "Unavailable");
    }
}
