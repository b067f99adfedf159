// src/store/action.rs

use crate::store::{FieldKey, StoreError};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StoreAction {
    /// Set one raw field. Snapshots are left alone.
    ChangeValue { key: FieldKey, value: f32 },
    /// Commit: refresh box_props and spring_props from the raw fields.
    UpdateBox,
    /// Roll new width, height and offsets. Does not commit.
    RandomizeBox,
}

impl StoreAction {
    pub const CHANGE_VALUE: &'static str = "CHANGE_VALUE";
    pub const UPDATE_BOX: &'static str = "UPDATE_BOX";
    pub const RANDOMIZE_BOX: &'static str = "RANDOMIZE_BOX";

    /// Builds an action from its tag and untyped payload.
    pub fn parse(kind: &str, key: Option<&str>, value: Option<f32>) -> Result<Self, StoreError> {
        match kind {
            Self::CHANGE_VALUE => {
                let key = key.ok_or(StoreError::MissingPayload {
                    kind: Self::CHANGE_VALUE,
                    field: "key",
                })?;
                let value = value.ok_or(StoreError::MissingPayload {
                    kind: Self::CHANGE_VALUE,
                    field: "value",
                })?;
                Ok(StoreAction::ChangeValue {
                    key: key.parse()?,
                    value,
                })
            }
            Self::UPDATE_BOX => Ok(StoreAction::UpdateBox),
            Self::RANDOMIZE_BOX => Ok(StoreAction::RandomizeBox),
            other => Err(StoreError::UnknownAction(other.to_string())),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            StoreAction::ChangeValue { .. } => Self::CHANGE_VALUE,
            StoreAction::UpdateBox => Self::UPDATE_BOX,
            StoreAction::RandomizeBox => Self::RANDOMIZE_BOX,
        }
    }
}
