//! Organization affiliations
//!
//! Static list of the organizations the portfolio account works with,
//! shown as cards above the contribution feed.

use serde::Serialize;

/// Role the account holds in an organization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrgRole {
    Maintainer,
    Contributor,
}

impl OrgRole {
    pub fn label(&self) -> &'static str {
        match self {
            OrgRole::Maintainer => "Maintainer",
            OrgRole::Contributor => "Contributor",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrgAffiliation {
    pub name: &'static str,
    pub role: OrgRole,
    pub url: &'static str,
}

pub const ORG_AFFILIATIONS: &[OrgAffiliation] = &[
    OrgAffiliation {
        name: "Aathoos",
        role: OrgRole::Maintainer,
        url: "https://github.com/aathoos",
    },
    OrgAffiliation {
        name: "MOFA-org",
        role: OrgRole::Contributor,
        url: "https://github.com/mofa-org",
    },
    OrgAffiliation {
        name: "LLVM",
        role: OrgRole::Contributor,
        url: "https://github.com/llvm",
    },
    OrgAffiliation {
        name: "Inspektor Gadget",
        role: OrgRole::Contributor,
        url: "https://github.com/inspektor-gadget",
    },
];
