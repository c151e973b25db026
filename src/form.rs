use crate::document::{DocumentError, ObligationDocument, ObligationLevel, ObligationType};
use crate::editor::TreeEditor;
use crate::model::NodeId;
use crate::parser::TextCodec;
use crate::picker::ElementPicker;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit,
    /// Copy of an existing record; the title must change before submitting.
    Duplicate { original_title: String },
}

/// Draft obligation plus the tree editor bound to its `text` field.
#[derive(Debug, Clone)]
pub struct ObligationForm {
    mode: FormMode,
    draft: ObligationDocument,
    editor: TreeEditor,
}

impl ObligationForm {
    pub fn add(codec: TextCodec) -> Self {
        Self::with_mode(FormMode::Add, ObligationDocument::default(), codec)
    }

    pub fn edit(record: ObligationDocument, codec: TextCodec) -> Self {
        Self::with_mode(FormMode::Edit, record, codec)
    }

    pub fn duplicate(record: ObligationDocument, codec: TextCodec) -> Self {
        let draft = ObligationDocument { id: None, ..record };
        let mode = FormMode::Duplicate {
            original_title: draft.title.clone(),
        };
        Self::with_mode(mode, draft, codec)
    }

    fn with_mode(mode: FormMode, draft: ObligationDocument, codec: TextCodec) -> Self {
        let editor = TreeEditor::new(Some(draft.text.as_str()), codec);
        Self { mode, draft, editor }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn draft(&self) -> &ObligationDocument {
        &self.draft
    }

    pub fn editor(&self) -> &TreeEditor {
        &self.editor
    }

    /// Runs tree edits, then writes the editor's text back into the draft.
    pub fn edit_tree<R>(&mut self, edit: impl FnOnce(&mut TreeEditor) -> R) -> R {
        let result = edit(&mut self.editor);
        self.draft.text = self.editor.text().to_string();
        result
    }

    /// Imports the picker's selected element into `node_id`. Returns false
    /// when nothing was selected.
    pub fn import_element(&mut self, node_id: NodeId, picker: &mut ElementPicker) -> bool {
        match picker.import() {
            Some(element) => {
                self.edit_tree(|editor| editor.update_node_element(node_id, &element));
                true
            }
            None => false,
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_level(&mut self, level: Option<ObligationLevel>) {
        self.draft.obligation_level = level;
    }

    pub fn set_type(&mut self, obligation_type: Option<ObligationType>) {
        self.draft.obligation_type = obligation_type;
    }

    pub fn preview(&self) -> String {
        self.draft.preview()
    }

    /// The payload to send, once the draft passes validation.
    pub fn submission(&self) -> Result<&ObligationDocument, DocumentError> {
        self.draft.validate()?;
        if let FormMode::Duplicate { original_title } = &self.mode {
            if self.draft.title == *original_title {
                return Err(DocumentError::DuplicateTitle(original_title.clone()));
            }
        }
        Ok(&self.draft)
    }
}
