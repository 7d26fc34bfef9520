//! Locale profiles and the resolver that picks one for a session.
//!
//! Formatting never reads process-wide state: the resolved [`LocaleProfile`]
//! is handed to every formatting call. Several sessions with different
//! locales can therefore coexist.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::consts::DEFAULT_LOCALE_CODE;
use crate::error::LocaleError;

/// Month and weekday names for one locale.
///
/// Weekday tables start on Sunday. Table lengths are fixed by the array
/// types, so a profile with the wrong number of names cannot be built or
/// deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleProfile {
    pub code:              String,
    pub month_names:       [String; 12],
    pub month_names_short: [String; 12],
    pub day_names:         [String; 7],
    pub day_names_short:   [String; 7],
}

fn table<const N: usize>(names: [&str; N]) -> [String; N] {
    names.map(str::to_owned)
}

impl LocaleProfile {
    /// The built-in English profile.
    pub fn english() -> Self {
        Self {
            code:              DEFAULT_LOCALE_CODE.to_owned(),
            month_names:       table([
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ]),
            month_names_short: table([
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
            ]),
            day_names:         table([
                "Sunday",
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
            ]),
            day_names_short:   table(["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]),
        }
    }

    pub fn is_default(&self) -> bool {
        self.code == DEFAULT_LOCALE_CODE
    }

    /// # Errors
    /// Returns `LocaleError::InvalidProfile` for a blank code or a blank name.
    pub fn validate(&self) -> Result<(), LocaleError> {
        let invalid = |reason| LocaleError::InvalidProfile {
            code: self.code.clone(),
            reason,
        };
        if self.code.trim().is_empty() {
            return Err(invalid("blank locale code"));
        }
        let mut all_names = self
            .month_names
            .iter()
            .chain(&self.month_names_short)
            .chain(&self.day_names)
            .chain(&self.day_names_short);
        if all_names.any(|name| name.trim().is_empty()) {
            return Err(invalid("blank month or day name"));
        }
        Ok(())
    }
}

impl Default for LocaleProfile {
    fn default() -> Self {
        Self::english()
    }
}

/// Source of locale data by code.
pub trait LocaleLoader {
    /// # Errors
    /// `NotFound` when the code is unknown, `LoadFailed` when the data exists
    /// but cannot be produced.
    fn load(&self, code: &str) -> Result<LocaleProfile, LocaleError>;
}

/// Locales compiled into the crate: English, French, German, Spanish.
#[derive(Debug, Default, Clone, Copy)]
pub struct BundledLocales;

impl LocaleLoader for BundledLocales {
    fn load(&self, code: &str) -> Result<LocaleProfile, LocaleError> {
        let profile = match code {
            "en" => LocaleProfile::english(),
            "fr" => LocaleProfile {
                code:              "fr".to_owned(),
                month_names:       table([
                    "janvier",
                    "février",
                    "mars",
                    "avril",
                    "mai",
                    "juin",
                    "juillet",
                    "août",
                    "septembre",
                    "octobre",
                    "novembre",
                    "décembre",
                ]),
                month_names_short: table([
                    "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.",
                    "nov.", "déc.",
                ]),
                day_names:         table([
                    "dimanche", "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi",
                ]),
                day_names_short:   table(["dim.", "lun.", "mar.", "mer.", "jeu.", "ven.", "sam."]),
            },
            "de" => LocaleProfile {
                code:              "de".to_owned(),
                month_names:       table([
                    "Januar",
                    "Februar",
                    "März",
                    "April",
                    "Mai",
                    "Juni",
                    "Juli",
                    "August",
                    "September",
                    "Oktober",
                    "November",
                    "Dezember",
                ]),
                month_names_short: table([
                    "Jan.", "Feb.", "März", "Apr.", "Mai", "Juni", "Juli", "Aug.", "Sep.", "Okt.",
                    "Nov.", "Dez.",
                ]),
                day_names:         table([
                    "Sonntag",
                    "Montag",
                    "Dienstag",
                    "Mittwoch",
                    "Donnerstag",
                    "Freitag",
                    "Samstag",
                ]),
                day_names_short:   table(["So.", "Mo.", "Di.", "Mi.", "Do.", "Fr.", "Sa."]),
            },
            "es" => LocaleProfile {
                code:              "es".to_owned(),
                month_names:       table([
                    "enero",
                    "febrero",
                    "marzo",
                    "abril",
                    "mayo",
                    "junio",
                    "julio",
                    "agosto",
                    "septiembre",
                    "octubre",
                    "noviembre",
                    "diciembre",
                ]),
                month_names_short: table([
                    "ene.", "feb.", "mar.", "abr.", "may.", "jun.", "jul.", "ago.", "sept.", "oct.",
                    "nov.", "dic.",
                ]),
                day_names:         table([
                    "domingo",
                    "lunes",
                    "martes",
                    "miércoles",
                    "jueves",
                    "viernes",
                    "sábado",
                ]),
                day_names_short:   table(["dom.", "lun.", "mar.", "mié.", "jue.", "vie.", "sáb."]),
            },
            other => return Err(LocaleError::NotFound(other.to_owned())),
        };
        Ok(profile)
    }
}

/// Picks the locale profile for a session.
///
/// Profiles added with [`LocaleResolver::register`] shadow the loader. Any
/// failure falls back to English, so resolution always yields a usable
/// profile.
pub struct LocaleResolver {
    loader:     Box<dyn LocaleLoader>,
    registered: HashMap<String, LocaleProfile>,
}

impl LocaleResolver {
    pub fn new(loader: impl LocaleLoader + 'static) -> Self {
        Self {
            loader:     Box::new(loader),
            registered: HashMap::new(),
        }
    }

    /// Makes host-supplied data available under its own code.
    ///
    /// # Errors
    /// Returns `LocaleError::InvalidProfile` and keeps the previous data if
    /// the profile fails validation.
    pub fn register(&mut self, profile: LocaleProfile) -> Result<(), LocaleError> {
        profile.validate()?;
        debug!(code = %profile.code, "registered locale");
        self.registered.insert(profile.code.clone(), profile);
        Ok(())
    }

    /// Resolves `code` to a profile. `None` or the default code returns
    /// English directly.
    pub fn resolve(&self, code: Option<&str>) -> LocaleProfile {
        let code = match code.map(str::trim) {
            None | Some("") | Some(DEFAULT_LOCALE_CODE) => return LocaleProfile::english(),
            Some(code) => code,
        };

        if let Some(profile) = self.registered.get(code) {
            info!(code, "using registered locale");
            return profile.clone();
        }

        match self.loader.load(code) {
            Ok(profile) => {
                info!(code, "locale loaded");
                profile
            },
            Err(LocaleError::NotFound(_)) => {
                warn!(code, "locale not found, falling back to {DEFAULT_LOCALE_CODE}");
                LocaleProfile::english()
            },
            Err(err) => {
                warn!(code, %err, "failed to load locale, falling back to {DEFAULT_LOCALE_CODE}");
                LocaleProfile::english()
            },
        }
    }

    /// Resolves host-supplied locale data for a session.
    ///
    /// The supplied names always feed the grid. Label formatting goes
    /// through [`LocaleResolver::resolve`] with the supplied code, so an
    /// unknown or unloadable code formats labels in English. Invalid data
    /// is dropped entirely.
    pub fn resolve_supplied(&self, supplied: Option<&LocaleProfile>) -> ResolvedLocale {
        let Some(profile) = supplied else {
            debug!("no locale supplied, using {DEFAULT_LOCALE_CODE}");
            return ResolvedLocale::default();
        };
        if let Err(err) = profile.validate() {
            warn!(%err, "rejected supplied locale, falling back to {DEFAULT_LOCALE_CODE}");
            return ResolvedLocale::default();
        }
        let resolved = ResolvedLocale {
            formatting: self.resolve(Some(&profile.code)),
            grid:       profile.clone(),
        };
        info!(code = %profile.code, formatting = %resolved.formatting.code, "locale updated");
        resolved
    }
}

/// Locale data in effect for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLocale {
    /// Names used by the header and month-year labels.
    pub formatting: LocaleProfile,
    /// Names handed to the calendar grid and weekday header.
    pub grid:       LocaleProfile,
}

impl Default for ResolvedLocale {
    fn default() -> Self {
        Self {
            formatting: LocaleProfile::english(),
            grid:       LocaleProfile::english(),
        }
    }
}

impl Default for LocaleResolver {
    fn default() -> Self {
        Self::new(BundledLocales)
    }
}

impl std::fmt::Debug for LocaleResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocaleResolver")
            .field("registered", &self.registered.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}
