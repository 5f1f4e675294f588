/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    /// Typing into one of the form fields
    Editing,
}

/// Which form field currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveField {
    Name,
    Date,
}

impl ActiveField {
    /// The other field (Tab cycling)
    pub fn next(&self) -> Self {
        match self {
            ActiveField::Name => ActiveField::Date,
            ActiveField::Date => ActiveField::Name,
        }
    }

    /// Label shown in the form pane
    pub fn label(&self) -> &'static str {
        match self {
            ActiveField::Name => "Name",
            ActiveField::Date => "Date (YYYY-MM-DD)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_field_cycles() {
        assert_eq!(ActiveField::Name.next(), ActiveField::Date);
        assert_eq!(ActiveField::Date.next(), ActiveField::Name);
    }
}
