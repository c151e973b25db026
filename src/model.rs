use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Imperative phrases recognized at the start of an element line.
/// `YOU MUST NOT` precedes `YOU MUST` so the longer phrase wins.
pub const IMPERATIVES: [&str; 4] = ["YOU MUST NOT", "YOU MUST", "YOU MAY", "YOU SHOULD"];

/// Session-local node identifier. Decoding always mints fresh ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(Uuid);

impl NodeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for NodeId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// What a node says: a free-text `type`/`text` pair, or a structured
/// language element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Payload {
    #[serde(rename_all = "camelCase")]
    Plain {
        #[serde(rename = "type")]
        kind: String,
        text: String,
    },
    #[serde(rename_all = "camelCase")]
    Element {
        language_element: String,
        action: String,
        object: String,
    },
}

impl Payload {
    pub fn plain(kind: impl Into<String>, text: impl Into<String>) -> Self {
        Payload::Plain {
            kind: kind.into(),
            text: text.into(),
        }
    }

    pub fn element(
        language_element: impl Into<String>,
        action: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Payload::Element {
            language_element: language_element.into(),
            action: action.into(),
            object: object.into(),
        }
    }

    /// The single serialized line for this payload, without indentation.
    pub fn line(&self) -> String {
        let line = match self {
            Payload::Plain { kind, text } => format!("{} {}", kind, text),
            Payload::Element {
                language_element,
                action,
                object,
            } => format!("{} {} {}", language_element, action, object),
        };
        line.trim().to_string()
    }
}

impl Default for Payload {
    fn default() -> Self {
        Payload::plain("", "")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: NodeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<NodeId>,
    #[serde(flatten)]
    pub payload: Payload,
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(payload: Payload, parent_id: Option<NodeId>) -> Self {
        Self {
            id: NodeId::new(),
            parent_id,
            payload,
            children: Vec::new(),
        }
    }

    /// Sets one field. Element fields turn a plain node into an element;
    /// plain fields are ignored on element nodes, which never show them.
    pub fn set_field(&mut self, field: NodeField, value: String) {
        if field.is_element_field() {
            if let Payload::Plain { .. } = self.payload {
                self.payload = Payload::element("", "", "");
            }
        }

        match (&mut self.payload, field) {
            (Payload::Plain { kind, .. }, NodeField::Type) => *kind = value,
            (Payload::Plain { text, .. }, NodeField::Text) => *text = value,
            (
                Payload::Element {
                    language_element, ..
                },
                NodeField::LanguageElement,
            ) => *language_element = value,
            (Payload::Element { action, .. }, NodeField::Action) => *action = value,
            (Payload::Element { object, .. }, NodeField::Object) => *object = value,
            (Payload::Element { .. }, _) => {
                tracing::debug!(node = %self.id, ?field, "plain field ignored on element node");
            }
            (Payload::Plain { .. }, _) => {}
        }
    }
}

/// Editable node fields, named as the UI and wire format name them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeField {
    Type,
    Text,
    LanguageElement,
    Action,
    Object,
}

impl NodeField {
    pub fn is_element_field(self) -> bool {
        matches!(
            self,
            NodeField::LanguageElement | NodeField::Action | NodeField::Object
        )
    }
}

impl FromStr for NodeField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "type" => Ok(NodeField::Type),
            "text" => Ok(NodeField::Text),
            "languageElement" => Ok(NodeField::LanguageElement),
            "action" => Ok(NodeField::Action),
            "object" => Ok(NodeField::Object),
            other => Err(format!("unknown node field: {}", other)),
        }
    }
}

/// A language element triple offered by the element picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObligationElement {
    pub language_element: String,
    pub action: String,
    pub object: String,
    #[serde(default)]
    pub selected: bool,
}

impl ObligationElement {
    pub fn new(
        language_element: impl Into<String>,
        action: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Self {
            language_element: language_element.into(),
            action: action.into(),
            object: object.into(),
            selected: false,
        }
    }

    pub fn to_payload(&self) -> Payload {
        Payload::element(&self.language_element, &self.action, &self.object)
    }
}
