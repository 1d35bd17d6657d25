use std::fmt;

/// Stable codes for every failure the version computation can report.
///
/// Codes are intended for machine filtering (e.g. a build system surfacing
/// them as build errors), so their text never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DiagnosticCode {
    /// Major outside [0, 99999]
    Csm100,
    /// Minor outside [0, 49999]
    Csm101,
    /// Patch outside [0, 9999]
    Csm102,
    /// Unknown pre-release name
    Csm103,
    /// Pre-release number outside [0, 99]
    Csm104,
    /// Pre-release fix outside [0, 99]
    Csm105,
    /// Only one of CI build index/name is set
    Csm106,
    /// CI build index has invalid syntax
    Csm107,
    /// CI build name has invalid syntax
    Csm108,
    /// Base version too large for a CI build
    Csm109,
}

impl DiagnosticCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticCode::Csm100 => "CSM100",
            DiagnosticCode::Csm101 => "CSM101",
            DiagnosticCode::Csm102 => "CSM102",
            DiagnosticCode::Csm103 => "CSM103",
            DiagnosticCode::Csm104 => "CSM104",
            DiagnosticCode::Csm105 => "CSM105",
            DiagnosticCode::Csm106 => "CSM106",
            DiagnosticCode::Csm107 => "CSM107",
            DiagnosticCode::Csm108 => "CSM108",
            DiagnosticCode::Csm109 => "CSM109",
        }
    }

    /// The user-facing message that accompanies this code.
    pub fn message(&self) -> &'static str {
        match self {
            DiagnosticCode::Csm100 => "BuildMajor value must be in range [0-99999]",
            DiagnosticCode::Csm101 => "BuildMinor value must be in range [0-49999]",
            DiagnosticCode::Csm102 => "BuildPatch value must be in range [0-9999]",
            DiagnosticCode::Csm103 => "PreRelease Name is unknown",
            DiagnosticCode::Csm104 => "PreReleaseNumber value must be in range [0-99]",
            DiagnosticCode::Csm105 => "PreReleaseFix value must be in range [0-99]",
            DiagnosticCode::Csm106 => {
                "If CiBuildIndex is set then CiBuildName must also be set; \
                 If CiBuildIndex is NOT set then CiBuildName must not be set."
            }
            DiagnosticCode::Csm107 => "CiBuildIndex does not match syntax defined by CSemVer",
            DiagnosticCode::Csm108 => "CiBuildName does not match syntax defined by CSemVer",
            DiagnosticCode::Csm109 => {
                "base version is too large to represent a valid CSemVer-CI version"
            }
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single coded failure, ready to be shown to a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub code: DiagnosticCode,
    pub message: String,
}

impl Diagnostic {
    pub fn new(code: DiagnosticCode) -> Self {
        Diagnostic {
            code,
            message: code.message().to_string(),
        }
    }
}

impl From<DiagnosticCode> for Diagnostic {
    fn from(code: DiagnosticCode) -> Self {
        Diagnostic::new(code)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// Every diagnostic found in one validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Diagnostics(pub Vec<Diagnostic>);

impl Diagnostics {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn codes(&self) -> Vec<DiagnosticCode> {
        self.0.iter().map(|d| d.code).collect()
    }

    pub fn contains(&self, code: DiagnosticCode) -> bool {
        self.0.iter().any(|d| d.code == code)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.0.iter()
    }
}

impl From<Vec<Diagnostic>> for Diagnostics {
    fn from(list: Vec<Diagnostic>) -> Self {
        Diagnostics(list)
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<String> = self.0.iter().map(|d| d.to_string()).collect();
        f.write_str(&joined.join("; "))
    }
}
