//! Fixed email blocklists.
//!
//! Matching is plain substring / suffix comparison and is case-sensitive.
//! Keep entries verbatim: the lists are compared literally.

/// Role-account and disposable local parts. Matched anywhere in the address.
pub const BLOCKED_LOCAL_PARTS: &[&str] = &[
    "abuse@",
    "admin@",
    "avidandlb@",
    "billing@",
    "compliance@",
    "devnull@",
    "dns@",
    "ftp@",
    "hostmaster@",
    "inoc@",
    "ispfeedback@",
    "ispsupport@",
    "list@",
    "list-request@",
    "maildaemon@",
    "noc@",
    "noreplyno-reply@",
    "null@",
    "phish@",
    "phishing@",
    "popmaster@",
    "postmaster@",
    "privacy@",
    "registrar@",
    "root@",
    "security@",
    "soporte@",
    "spam@",
    "support@",
    "sysadmin@",
    "tech@",
    "undisclosed-recipients@",
    "unsubscribe@",
    "usenet@",
    "uucp@",
    "webmaster@",
    "webmasters@",
];

/// Misspelled or placeholder provider fragments. Matched anywhere in the address.
pub const TYPO_DOMAIN_FRAGMENTS: &[&str] = &[
    "@gmial",
    "@hotmial",
    "@hotmaill",
    "@noregistra",
    "@hormail",
    "@gamail",
    "@gamil",
    "@gimail",
    "@outlooki",
    "@ooutlook",
    "@yohoo",
    "@oitlook",
    "@gogglemail",
    "@gogolemail",
    "@outlooi",
    "@gmaio",
    "@gmil",
    "@gmal",
    "@yahhoo",
    "@yahool",
    "@yahoocom",
    "@hmail",
    "@ymail",
    "@yimail",
    "@noposee",
    "@notiene",
    "@notiene2",
    "@gmsil",
    "@yayoo",
    "@gemail",
    "@test.com",
    "@iclod.com",
    "@gmaail",
    "@gnail",
    "@email",
    "@gmali",
    "@igmail",
    "@gmaim",
    "@gmailc",
];

/// Placeholder tokens typed in when a contact has no address.
/// Matched anywhere in the address, not only after `@`.
pub const FILLER_TOKENS: &[&str] = &["noposee", "notiene", "notiene2"];

/// Country domains that are not accepted.
pub const BLOCKED_COUNTRY_SUFFIXES: &[&str] =
    &[".de", ".fr", ".it", ".au", ".ca", ".uk", ".ru", ".vn"];

/// Corrupted `.com`-like endings.
pub const MALFORMED_SUFFIXES: &[&str] = &[
    ".combjnkkklooo",
    ".comty",
    ".comcom",
    ".comhmn",
    ".con",
    ".comm",
    ".comn",
    ".xon",
    ".comj",
    ".comnb",
    ".comb",
    ".como",
    ".comx",
    ".coma",
    ".comf",
    ".cm",
    ".comk",
    ".comar",
    ".om",
    ".cmo",
    ".cim",
    ".conm",
    ".conb",
    ".comz",
    ".commm",
    ".comhjm",
    ".comco",
    ".vom",
    ".comment",
    ".come",
    ".comy",
    ".comic",
    ".comTy",
    ".comg",
    ".comd",
    ".comu",
];

/// Blocklists applied by the email validator.
#[derive(Debug, Clone, Copy)]
pub struct EmailBlocklist {
    /// Rejected when found anywhere in the address, checked in order.
    pub fragments: &'static [&'static [&'static str]],
    /// Rejected when the address ends with one of them.
    pub suffixes: &'static [&'static [&'static str]],
}

impl EmailBlocklist {
    /// The built-in lists.
    pub const DEFAULT: EmailBlocklist = EmailBlocklist {
        fragments: &[BLOCKED_LOCAL_PARTS, TYPO_DOMAIN_FRAGMENTS, FILLER_TOKENS],
        suffixes: &[BLOCKED_COUNTRY_SUFFIXES, MALFORMED_SUFFIXES],
    };

    /// First blocked fragment contained in `email`.
    pub fn find_fragment(&self, email: &str) -> Option<&'static str> {
        self.fragments
            .iter()
            .flat_map(|list| list.iter().copied())
            .find(|fragment| email.contains(fragment))
    }

    /// First blocked suffix `email` ends with.
    pub fn find_suffix(&self, email: &str) -> Option<&'static str> {
        self.suffixes
            .iter()
            .flat_map(|list| list.iter().copied())
            .find(|suffix| email.ends_with(suffix))
    }
}

impl Default for EmailBlocklist {
    fn default() -> Self {
        Self::DEFAULT
    }
}
