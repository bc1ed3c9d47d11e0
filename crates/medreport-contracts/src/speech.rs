//! Speech synthesis request types.
//!
//! Spoken output is limited to a fixed set of languages. The synthesizer
//! itself is an external collaborator; these types only describe what is
//! sent to it and what comes back.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::MedReportError;

/// Languages the speech collaborator is asked to speak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpeechLanguage {
    #[serde(rename = "ta")]
    Tamil,
    #[serde(rename = "hi")]
    Hindi,
}

impl SpeechLanguage {
    /// ISO 639-1 code sent to the synthesizer.
    pub fn code(self) -> &'static str {
        match self {
            SpeechLanguage::Tamil => "ta",
            SpeechLanguage::Hindi => "hi",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SpeechLanguage::Tamil => "Tamil",
            SpeechLanguage::Hindi => "Hindi",
        }
    }

    pub const ALL: [SpeechLanguage; 2] = [SpeechLanguage::Tamil, SpeechLanguage::Hindi];
}

impl fmt::Display for SpeechLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for SpeechLanguage {
    type Err = MedReportError;

    /// Accepts either the code (`ta`, `hi`) or the English name, any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        SpeechLanguage::ALL
            .into_iter()
            .find(|l| l.code().eq_ignore_ascii_case(needle) || l.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| MedReportError::InvalidField {
                field: "speech_language".to_string(),
                reason: format!("unsupported language '{}'; expected one of: ta, hi", needle),
            })
    }
}

/// What the synthesizer is asked to speak.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeechRequest {
    pub disease: String,
    pub medicine: String,
    pub language: SpeechLanguage,
}

impl SpeechRequest {
    /// The sentence handed to the synthesizer.
    pub fn script(&self) -> String {
        format!("Disease: {}. Medicine: {}.", self.disease, self.medicine)
    }
}

/// Reference to audio produced by the synthesizer (a path, URL, or handle).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioAsset {
    pub reference: String,
    pub language: SpeechLanguage,
}
