//! Capability-set permission model.
//!
//! Each role row stores its grants as `"module:action"` entries
//! (e.g. `"contacts:delete"`). The auth layer parses them once per request
//! into a [`PermissionSet`]; handlers go through the single
//! [`PermissionSet::allows`] entry point instead of re-deriving access
//! rules per call site.

use std::collections::HashSet;

// ---------------------------------------------------------------------------
// Modules and actions
// ---------------------------------------------------------------------------

/// A permissioned area of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Module {
    Contacts,
    Companies,
    Leads,
    Tasks,
    LeadSources,
    Users,
}

impl Module {
    pub fn from_str_value(s: &str) -> Option<Self> {
        match s {
            "contacts" => Some(Self::Contacts),
            "companies" => Some(Self::Companies),
            "leads" => Some(Self::Leads),
            "tasks" => Some(Self::Tasks),
            "lead_sources" => Some(Self::LeadSources),
            "users" => Some(Self::Users),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Contacts => "contacts",
            Self::Companies => "companies",
            Self::Leads => "leads",
            Self::Tasks => "tasks",
            Self::LeadSources => "lead_sources",
            Self::Users => "users",
        }
    }
}

/// An action within a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    View,
    Create,
    Edit,
    Delete,
    /// View unmasked PII fields (contact email and phone numbers).
    ViewPii,
}

impl Action {
    pub fn from_str_value(s: &str) -> Option<Self> {
        match s {
            "view" => Some(Self::View),
            "create" => Some(Self::Create),
            "edit" => Some(Self::Edit),
            "delete" => Some(Self::Delete),
            "view_pii" => Some(Self::ViewPii),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Create => "create",
            Self::Edit => "edit",
            Self::Delete => "delete",
            Self::ViewPii => "view_pii",
        }
    }
}

// ---------------------------------------------------------------------------
// Permission set
// ---------------------------------------------------------------------------

/// The set of `(module, action)` grants attached to a request.
#[derive(Debug, Clone, Default)]
pub struct PermissionSet {
    grants: HashSet<(Module, Action)>,
}

impl PermissionSet {
    /// Parse `"module:action"` entries from a role row.
    ///
    /// Unknown modules or actions are skipped so a stale role row cannot
    /// make every request fail.
    pub fn from_entries<S: AsRef<str>>(entries: &[S]) -> Self {
        let grants = entries
            .iter()
            .filter_map(|entry| {
                let (module, action) = entry.as_ref().split_once(':')?;
                Some((Module::from_str_value(module)?, Action::from_str_value(action)?))
            })
            .collect();
        Self { grants }
    }

    /// The single permission-check entry point.
    pub fn allows(&self, module: Module, action: Action) -> bool {
        self.grants.contains(&(module, action))
    }
}
