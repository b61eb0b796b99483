//! Auxiliary reference lists (`<lists>`).
//!
//! These records are retained as parsed metadata and have no role in
//! rendering.

use serde::{Deserialize, Serialize};

/// Declares a list container and its name-bearing record type.
macro_rules! name_list {
    ($(#[$meta:meta])* $list:ident, $list_tag:tt, $record:ident, $record_tag:tt) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename = $list_tag)]
        pub struct $list {
            #[serde(rename = $record_tag, default, skip_serializing_if = "Vec::is_empty")]
            pub items: Vec<$record>,
        }

        impl $list {
            /// Names of all records, skipping unnamed ones.
            pub fn names(&self) -> Vec<&str> {
                self.items.iter().filter_map(|r| r.name.as_deref()).collect()
            }
        }

        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename = $record_tag)]
        pub struct $record {
            #[serde(rename = "@name", default, skip_serializing_if = "Option::is_none")]
            pub name: Option<String>,
        }

        impl $record {
            pub fn new(name: impl Into<String>) -> Self {
                Self {
                    name: Some(name.into()),
                }
            }
        }
    };
}

name_list!(
    /// Character names known to the project.
    Characters, "characters", Character, "character"
);
name_list!(
    /// Scene locations.
    Locations, "locations", Location, "location"
);
name_list!(
    /// Scene heading intros (INT., EXT., ...).
    SceneIntros, "scene_intros", SceneIntro, "scene_intro"
);
name_list!(
    /// Scene times (DAY, NIGHT, ...).
    SceneTimes, "scene_times", SceneTime, "scene_time"
);
name_list!(
    /// Character extensions (V.O., O.S., ...).
    Extensions, "extensions", Extension, "extension"
);
name_list!(
    /// Transitions (CUT TO:, ...).
    Transitions, "transitions", Transition, "transition"
);
name_list!(TagCategories, "tag_categories", TagCategory, "tag_category");

/// Revision colors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "revision_colors")]
pub struct RevisionColors {
    #[serde(rename = "revision_color", default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<RevisionColor>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "revision_color")]
pub struct RevisionColor {
    #[serde(rename = "@name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "@index", default, skip_serializing_if = "Option::is_none")]
    pub index: Option<String>,

    #[serde(rename = "@color_name", default, skip_serializing_if = "Option::is_none")]
    pub color_name: Option<String>,

    #[serde(rename = "@color_index", default, skip_serializing_if = "Option::is_none")]
    pub color_index: Option<String>,
}

/// All auxiliary lists of a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "lists")]
pub struct Lists {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub characters: Option<Characters>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locations: Option<Locations>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scene_intros: Option<SceneIntros>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scene_times: Option<SceneTimes>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Extensions>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transitions: Option<Transitions>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision_colors: Option<RevisionColors>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_categories: Option<TagCategories>,
}

impl Lists {
    /// Names from the character list, in document order.
    pub fn character_names(&self) -> Vec<&str> {
        self.characters
            .as_ref()
            .map(Characters::names)
            .unwrap_or_default()
    }

    /// Names from the location list, in document order.
    pub fn location_names(&self) -> Vec<&str> {
        self.locations
            .as_ref()
            .map(Locations::names)
            .unwrap_or_default()
    }
}
