//! Colors and style tables handed to the presentation layer.
//!
//! The core only reads `primary` (selection marking). Everything else passes
//! through to the renderer after host overrides are applied.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Full color palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    pub primary:            String,
    pub background:         String,
    pub text:               String,
    pub selected_text:      String,
    pub disabled_text:      String,
    pub header_background:  String,
    pub year_text:          String,
    pub month_year_text:    String,
    pub button_text:        String,
    pub today_text:         String,
    pub day_text:           String,
    pub dot_color:          String,
    pub selected_dot_color: String,
    pub arrow_color:        String,
    pub month_text_color:   String,
    pub indicator_color:    String,
}

impl Default for ThemeColors {
    fn default() -> Self {
        let s = str::to_owned;
        Self {
            primary:            s("#018577"),
            background:         s("#FFFFFF"),
            text:               s("#000000"),
            selected_text:      s("#FFFFFF"),
            disabled_text:      s("#D9E1E8"),
            header_background:  s("#018577"),
            year_text:          s("#FFFFFF"),
            month_year_text:    s("#000000"),
            button_text:        s("#018577"),
            today_text:         s("#000000"),
            day_text:           s("#2D4150"),
            dot_color:          s("#018577"),
            selected_dot_color: s("#FFFFFF"),
            arrow_color:        s("#018577"),
            month_text_color:   s("#018577"),
            indicator_color:    s("#018577"),
        }
    }
}

/// Partial palette supplied by the host; unset entries keep the default.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ThemeOverrides {
    pub primary:            Option<String>,
    pub background:         Option<String>,
    pub text:               Option<String>,
    pub selected_text:      Option<String>,
    pub disabled_text:      Option<String>,
    pub header_background:  Option<String>,
    pub year_text:          Option<String>,
    pub month_year_text:    Option<String>,
    pub button_text:        Option<String>,
    pub today_text:         Option<String>,
    pub day_text:           Option<String>,
    pub dot_color:          Option<String>,
    pub selected_dot_color: Option<String>,
    pub arrow_color:        Option<String>,
    pub month_text_color:   Option<String>,
    pub indicator_color:    Option<String>,
}

impl ThemeColors {
    /// Shallow overlay of `overrides` on top of `self`.
    pub fn merged(mut self, overrides: &ThemeOverrides) -> Self {
        macro_rules! overlay {
            ($($field:ident),+ $(,)?) => {
                $(
                    if let Some(value) = &overrides.$field {
                        self.$field.clone_from(value);
                    }
                )+
            };
        }
        overlay!(
            primary,
            background,
            text,
            selected_text,
            disabled_text,
            header_background,
            year_text,
            month_year_text,
            button_text,
            today_text,
            day_text,
            dot_color,
            selected_dot_color,
            arrow_color,
            month_text_color,
            indicator_color,
        );
        self
    }
}

/// One style entry: property name to value.
pub type StyleTable = BTreeMap<String, String>;

/// Named style entries, e.g. `"headerContainer" -> {"padding": "16"}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleOverrides(pub BTreeMap<String, StyleTable>);

impl StyleOverrides {
    /// Overlays `overrides` onto `self` entry by entry. Entry names missing
    /// from `self` are ignored.
    pub fn merged(mut self, overrides: &Self) -> Self {
        for (name, table) in &overrides.0 {
            if let Some(base) = self.0.get_mut(name) {
                base.extend(table.iter().map(|(k, v)| (k.clone(), v.clone())));
            }
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&StyleTable> {
        self.0.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&str, &str)]) -> StyleTable {
        entries
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    #[test]
    fn overrides_replace_only_set_colors() {
        let overrides = ThemeOverrides {
            primary: Some("#FF0000".to_owned()),
            ..ThemeOverrides::default()
        };
        let colors = ThemeColors::default().merged(&overrides);
        assert_eq!(colors.primary, "#FF0000");
        assert_eq!(colors.background, "#FFFFFF");
        assert_eq!(colors.header_background, "#018577");
    }

    #[test]
    fn overrides_deserialize_camel_case() {
        let overrides: ThemeOverrides =
            serde_json::from_str(r##"{"headerBackground": "#123456"}"##).unwrap();
        assert_eq!(overrides.header_background.as_deref(), Some("#123456"));
        assert!(serde_json::from_str::<ThemeOverrides>(r#"{"nope": "x"}"#).is_err());
    }

    #[test]
    fn style_merge_is_shallow_and_ignores_unknown_entries() {
        let base = StyleOverrides(BTreeMap::from([(
            "button".to_owned(),
            table(&[("padding", "8"), ("marginLeft", "8")]),
        )]));
        let overrides = StyleOverrides(BTreeMap::from([
            ("button".to_owned(), table(&[("padding", "12")])),
            ("unknown".to_owned(), table(&[("color", "red")])),
        ]));

        let merged = base.merged(&overrides);
        assert_eq!(
            merged.get("button"),
            Some(&table(&[("padding", "12"), ("marginLeft", "8")]))
        );
        assert!(merged.get("unknown").is_none());
    }
}
