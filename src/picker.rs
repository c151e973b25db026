use crate::model::ObligationElement;

/// The curated language elements offered for import into a node.
pub fn predefined_elements() -> Vec<ObligationElement> {
    vec![
        ObligationElement::new("YOU MUST NOT", "Modify", "License text"),
        ObligationElement::new("YOU MUST", "Provide", "License text"),
    ]
}

/// Single-choice selection over a list of elements.
#[derive(Debug, Clone)]
pub struct ElementPicker {
    elements: Vec<ObligationElement>,
    selected: Option<usize>,
}

impl ElementPicker {
    pub fn new(elements: Vec<ObligationElement>) -> Self {
        Self {
            elements,
            selected: None,
        }
    }

    pub fn elements(&self) -> &[ObligationElement] {
        &self.elements
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Out-of-range indices leave the selection unchanged.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.elements.len() {
            self.selected = Some(index);
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Hands out the selected element marked as selected and resets the picker.
    pub fn import(&mut self) -> Option<ObligationElement> {
        let element = self
            .selected
            .and_then(|index| self.elements.get(index))
            .map(|element| ObligationElement {
                selected: true,
                ..element.clone()
            });
        self.clear();
        element
    }
}

impl Default for ElementPicker {
    fn default() -> Self {
        Self::new(predefined_elements())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predefined_catalog() {
        let elements = predefined_elements();
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].language_element, "YOU MUST NOT");
        assert_eq!(elements[1].action, "Provide");
        assert!(elements.iter().all(|e| !e.selected));
    }

    #[test]
    fn test_import_without_selection() {
        let mut picker = ElementPicker::default();
        assert_eq!(picker.import(), None);
    }

    #[test]
    fn test_import_selected_and_reset() {
        let mut picker = ElementPicker::default();
        assert!(picker.select(1));

        let element = picker.import().unwrap();
        assert_eq!(element.language_element, "YOU MUST");
        assert_eq!(element.object, "License text");
        assert!(element.selected);

        assert_eq!(picker.selected(), None);
        assert_eq!(picker.import(), None);
    }

    #[test]
    fn test_select_out_of_range() {
        let mut picker = ElementPicker::default();
        picker.select(0);
        assert!(!picker.select(7));
        assert_eq!(picker.selected(), Some(0));
    }
}
