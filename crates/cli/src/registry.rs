// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Best-practice check codes for each supported STIX version.
//!
//! Each table maps the short numeric codes accepted by `--enable` and
//! `--disable` to canonical check names. Lookups are partial: an entry that
//! is not a known code is treated as an already-canonical name and passed
//! through unchanged.

use std::fmt;

/// Version validated against when none is requested.
pub const DEFAULT_VERSION: &str = "2.1";

/// The only version served by the legacy table.
pub const LEGACY_VERSION: &str = "2.0";

/// STIX specification revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecVersion {
    V2_0,
    V2_1,
}

impl SpecVersion {
    /// Resolve a version string. Only the exact legacy string selects 2.0.
    pub fn from_version(version: &str) -> Self {
        if version == LEGACY_VERSION {
            SpecVersion::V2_0
        } else {
            SpecVersion::V2_1
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SpecVersion::V2_0 => LEGACY_VERSION,
            SpecVersion::V2_1 => DEFAULT_VERSION,
        }
    }
}

impl fmt::Display for SpecVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of a check-code table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckCode {
    /// Short numeric code, e.g. `"202"`.
    pub code: &'static str,
    /// Canonical kebab-case check name.
    pub name: &'static str,
    /// What the check ensures, for help output.
    pub summary: &'static str,
}

const fn entry(code: &'static str, name: &'static str, summary: &'static str) -> CheckCode {
    CheckCode {
        code,
        name,
        summary,
    }
}

/// Code table for one specification version.
#[derive(Debug, PartialEq, Eq)]
pub struct CheckRegistry {
    version: SpecVersion,
    entries: &'static [CheckCode],
}

impl CheckRegistry {
    /// Table for the given version string.
    pub fn for_version(version: &str) -> &'static CheckRegistry {
        Self::for_spec(SpecVersion::from_version(version))
    }

    pub fn for_spec(version: SpecVersion) -> &'static CheckRegistry {
        match version {
            SpecVersion::V2_0 => &CHECK_CODES_20,
            SpecVersion::V2_1 => &CHECK_CODES_21,
        }
    }

    /// Table for [`DEFAULT_VERSION`].
    pub fn default_registry() -> &'static CheckRegistry {
        &CHECK_CODES_21
    }

    pub fn version(&self) -> SpecVersion {
        self.version
    }

    pub fn entries(&self) -> &'static [CheckCode] {
        self.entries
    }

    /// Canonical name for a numeric code.
    pub fn lookup(&self, code: &str) -> Option<&'static str> {
        self.entries.iter().find(|e| e.code == code).map(|e| e.name)
    }

    /// Numeric code for a canonical name.
    pub fn code_of(&self, name: &str) -> Option<&'static str> {
        self.entries.iter().find(|e| e.name == name).map(|e| e.code)
    }

    /// Map a code to its name; anything else comes back unchanged.
    pub fn canonical_name<'a>(&self, entry: &'a str) -> &'a str {
        self.lookup(entry).unwrap_or(entry)
    }

    /// Map every entry through [`Self::canonical_name`], keeping order.
    pub fn expand<S: AsRef<str>>(&self, entries: &[S]) -> Vec<String> {
        entries
            .iter()
            .map(|e| self.canonical_name(e.as_ref()).to_string())
            .collect()
    }

    /// Umbrella entries (`format-checks`, `all-vocabs`, ...) covering a check.
    pub fn groups_of(&self, name: &str) -> Vec<&'static str> {
        let Some(code) = self.code_of(name) else {
            return Vec::new();
        };
        if code.len() != 3 {
            return Vec::new();
        }
        let Ok(n) = code.parse::<u16>() else {
            return Vec::new();
        };

        let mut umbrellas = vec![&code[..1]];
        match n {
            211..=269 => umbrellas.push("210"),
            271..=299 => umbrellas.push("270"),
            _ => {}
        }
        umbrellas
            .into_iter()
            .filter_map(|c| self.lookup(c))
            .collect()
    }
}

/// Split a comma-separated check list, dropping blank items.
pub fn split_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

static CHECK_CODES_21: CheckRegistry = CheckRegistry {
    version: SpecVersion::V2_1,
    entries: &[
        entry("1", "format-checks", "all 1xx checks are run"),
        entry(
            "101",
            "custom-prefix",
            "names of custom object types, properties, observable objects, observable object properties, and observable object extensions follow the correct format",
        ),
        entry(
            "102",
            "custom-prefix-lax",
            "same as 101 but more lenient; no source identifier needed in prefix",
        ),
        entry(
            "111",
            "open-vocab-format",
            "values of open vocabularies follow the correct format",
        ),
        entry(
            "121",
            "kill-chain-names",
            "kill-chain-phase name and phase follow the correct format",
        ),
        entry(
            "141",
            "observable-object-keys",
            "observable object keys follow the correct format",
        ),
        entry(
            "142",
            "observable-dictionary-keys",
            "dictionaries in cyber observable objects follow the correct format",
        ),
        entry(
            "149",
            "windows-process-priority-format",
            "windows-process-ext's 'priority' follows the correct format",
        ),
        entry(
            "150",
            "hash-length",
            "keys in 'hashes'-type properties are not too long",
        ),
        entry("2", "approved-values", "all 2xx checks are run"),
        entry(
            "201",
            "marking-definition-type",
            "marking definitions use a valid definition_type",
        ),
        entry(
            "202",
            "relationship-types",
            "relationships are among those defined in the specification",
        ),
        entry(
            "203",
            "duplicate-ids",
            "objects in a bundle with duplicate IDs have different `modified` timestamps",
        ),
        entry(
            "210",
            "all-vocabs",
            "all of the following open vocabulary checks are run",
        ),
        entry(
            "211",
            "attack-motivation",
            "certain property values are from the attack_motivation vocabulary",
        ),
        entry(
            "212",
            "attack-resource-level",
            "certain property values are from the attack_resource_level vocabulary",
        ),
        entry(
            "213",
            "identity-class",
            "certain property values are from the identity_class vocabulary",
        ),
        entry(
            "214",
            "indicator-types",
            "certain property values are from the indicator_types vocabulary",
        ),
        entry(
            "215",
            "industry-sector",
            "certain property values are from the industry_sector vocabulary",
        ),
        entry(
            "216",
            "malware-types",
            "certain property values are from the malware_types vocabulary",
        ),
        entry(
            "218",
            "report-types",
            "certain property values are from the report_types vocabulary",
        ),
        entry(
            "219",
            "threat-actor-types",
            "certain property values are from the threat_actor_types vocabulary",
        ),
        entry(
            "220",
            "threat-actor-role",
            "certain property values are from the threat_actor_role vocabulary",
        ),
        entry(
            "221",
            "threat-actor-sophistication",
            "certain property values are from the threat_actor_sophistication vocabulary",
        ),
        entry(
            "222",
            "tool-types",
            "certain property values are from the tool_types vocabulary",
        ),
        entry(
            "223",
            "region",
            "certain property values are from the region vocabulary",
        ),
        entry(
            "241",
            "hash-algo",
            "certain property values are from the hash-algo vocabulary",
        ),
        entry(
            "243",
            "windows-pebinary-type",
            "certain property values are from the windows-pebinary-type vocabulary",
        ),
        entry(
            "244",
            "account-type",
            "certain property values are from the account-type vocabulary",
        ),
        entry(
            "270",
            "all-external-sources",
            "all of the following external source checks are run",
        ),
        entry(
            "271",
            "mime-type",
            "file.mime_type is a valid IANA MIME type",
        ),
        entry(
            "272",
            "protocols",
            "certain property values are valid IANA Service and Protocol names",
        ),
        entry(
            "273",
            "ipfix",
            "certain property values are valid IANA IP Flow Information Export (IPFIX) Entities",
        ),
        entry(
            "274",
            "http-request-headers",
            "certain property values are valid HTTP request header names",
        ),
        entry(
            "275",
            "socket-options",
            "certain property values are valid socket options",
        ),
        entry(
            "276",
            "pdf-doc-info",
            "certain property values are valid PDF Document Information Dictionary keys",
        ),
        entry(
            "277",
            "countries",
            "certain property values are valid ISO 3166-1 ALPHA-2 codes",
        ),
        entry(
            "301",
            "network-traffic-ports",
            "network-traffic objects contain both src_port and dst_port",
        ),
        entry(
            "302",
            "extref-hashes",
            "external references SHOULD have hashes if they have a url",
        ),
    ],
};

static CHECK_CODES_20: CheckRegistry = CheckRegistry {
    version: SpecVersion::V2_0,
    entries: &[
        entry("1", "format-checks", "all 1xx checks are run"),
        entry(
            "101",
            "custom-prefix",
            "names of custom object types, properties, observable objects, observable object properties, and observable object extensions follow the correct format",
        ),
        entry(
            "102",
            "custom-prefix-lax",
            "same as 101 but more lenient; no source identifier needed in prefix",
        ),
        entry(
            "111",
            "open-vocab-format",
            "values of open vocabularies follow the correct format",
        ),
        entry(
            "121",
            "kill-chain-names",
            "kill-chain-phase name and phase follow the correct format",
        ),
        entry(
            "141",
            "observable-object-keys",
            "observable object keys follow the correct format",
        ),
        entry(
            "142",
            "observable-dictionary-keys",
            "dictionaries in cyber observable objects follow the correct format",
        ),
        entry(
            "143",
            "custom-observable-object-prefix",
            "custom observable object names follow the correct format",
        ),
        entry(
            "144",
            "custom-observable-object-prefix-lax",
            "same as 143 but more lenient; no source identifier needed in prefix",
        ),
        entry(
            "145",
            "custom-object-extension-prefix",
            "custom observable object extension names follow the correct format",
        ),
        entry(
            "146",
            "custom-object-extension-prefix-lax",
            "same as 145 but more lenient; no source identifier needed in prefix",
        ),
        entry(
            "147",
            "custom-observable-properties-prefix",
            "observable object custom property names follow the correct format",
        ),
        entry(
            "148",
            "custom-observable-properties-prefix-lax",
            "same as 147 but more lenient; no source identifier needed in prefix",
        ),
        entry(
            "149",
            "windows-process-priority-format",
            "windows-process-ext's 'priority' follows the correct format",
        ),
        entry(
            "150",
            "hash-length",
            "keys in 'hashes'-type properties are not too long",
        ),
        entry("2", "approved-values", "all 2xx checks are run"),
        entry(
            "201",
            "marking-definition-type",
            "marking definitions use a valid definition_type",
        ),
        entry(
            "202",
            "relationship-types",
            "relationships are among those defined in the specification",
        ),
        entry(
            "203",
            "duplicate-ids",
            "objects in a bundle with duplicate IDs have different `modified` timestamps",
        ),
        entry(
            "210",
            "all-vocabs",
            "all of the following open vocabulary checks are run",
        ),
        entry(
            "211",
            "attack-motivation",
            "certain property values are from the attack_motivation vocabulary",
        ),
        entry(
            "212",
            "attack-resource-level",
            "certain property values are from the attack_resource_level vocabulary",
        ),
        entry(
            "213",
            "identity-class",
            "certain property values are from the identity_class vocabulary",
        ),
        entry(
            "214",
            "indicator-label",
            "certain property values are from the indicator_label vocabulary",
        ),
        entry(
            "215",
            "industry-sector",
            "certain property values are from the industry_sector vocabulary",
        ),
        entry(
            "216",
            "malware-label",
            "certain property values are from the malware_label vocabulary",
        ),
        entry(
            "218",
            "report-label",
            "certain property values are from the report_label vocabulary",
        ),
        entry(
            "219",
            "threat-actor-label",
            "certain property values are from the threat_actor_label vocabulary",
        ),
        entry(
            "220",
            "threat-actor-role",
            "certain property values are from the threat_actor_role vocabulary",
        ),
        entry(
            "221",
            "threat-actor-sophistication",
            "certain property values are from the threat_actor_sophistication vocabulary",
        ),
        entry(
            "222",
            "tool-label",
            "certain property values are from the tool_label vocabulary",
        ),
        entry(
            "241",
            "hash-algo",
            "certain property values are from the hash-algo vocabulary",
        ),
        entry(
            "242",
            "encryption-algo",
            "certain property values are from the encryption-algo vocabulary",
        ),
        entry(
            "243",
            "windows-pebinary-type",
            "certain property values are from the windows-pebinary-type vocabulary",
        ),
        entry(
            "244",
            "account-type",
            "certain property values are from the account-type vocabulary",
        ),
        entry(
            "270",
            "all-external-sources",
            "all of the following external source checks are run",
        ),
        entry(
            "271",
            "mime-type",
            "file.mime_type is a valid IANA MIME type",
        ),
        entry(
            "272",
            "protocols",
            "certain property values are valid IANA Service and Protocol names",
        ),
        entry(
            "273",
            "ipfix",
            "certain property values are valid IANA IP Flow Information Export (IPFIX) Entities",
        ),
        entry(
            "274",
            "http-request-headers",
            "certain property values are valid HTTP request header names",
        ),
        entry(
            "275",
            "socket-options",
            "certain property values are valid socket options",
        ),
        entry(
            "276",
            "pdf-doc-info",
            "certain property values are valid PDF Document Information Dictionary keys",
        ),
        entry(
            "301",
            "network-traffic-ports",
            "network-traffic objects contain both src_port and dst_port",
        ),
        entry(
            "302",
            "extref-hashes",
            "external references SHOULD have hashes if they have a url",
        ),
    ],
};

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
