use serde::{Deserialize, Serialize};

/// Which extraction strategy produced the final text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionMethod {
    Structured,
    ByteScanFallback,
    FilenameFallback,
    Emergency,
}

impl std::fmt::Display for ExtractionMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Structured => write!(f, "structured"),
            Self::ByteScanFallback => write!(f, "byte_scan_fallback"),
            Self::FilenameFallback => write!(f, "filename_fallback"),
            Self::Emergency => write!(f, "emergency"),
        }
    }
}

impl std::str::FromStr for ExtractionMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "structured" => Ok(Self::Structured),
            "byte_scan_fallback" | "byte_scan" => Ok(Self::ByteScanFallback),
            "filename_fallback" | "filename" => Ok(Self::FilenameFallback),
            "emergency" => Ok(Self::Emergency),
            _ => Err(format!("Unknown extraction method: {s}")),
        }
    }
}

/// Coarse confidence label for extracted text. Variants are ordered from
/// worst to best so labels can be compared directly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum TextQuality {
    #[default]
    Poor,
    Fair,
    Good,
    Excellent,
}

impl std::fmt::Display for TextQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Poor => write!(f, "poor"),
            Self::Fair => write!(f, "fair"),
            Self::Good => write!(f, "good"),
            Self::Excellent => write!(f, "excellent"),
        }
    }
}

impl std::str::FromStr for TextQuality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "poor" => Ok(Self::Poor),
            "fair" => Ok(Self::Fair),
            "good" => Ok(Self::Good),
            "excellent" => Ok(Self::Excellent),
            _ => Err(format!("Unknown text quality: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_quality_default() {
        assert_eq!(TextQuality::default(), TextQuality::Poor);
    }

    #[test]
    fn test_text_quality_ordering() {
        assert!(TextQuality::Poor < TextQuality::Fair);
        assert!(TextQuality::Fair < TextQuality::Good);
        assert!(TextQuality::Good < TextQuality::Excellent);
    }

    #[test]
    fn test_extraction_method_display() {
        assert_eq!(ExtractionMethod::Structured.to_string(), "structured");
        assert_eq!(
            ExtractionMethod::ByteScanFallback.to_string(),
            "byte_scan_fallback"
        );
        assert_eq!(
            ExtractionMethod::FilenameFallback.to_string(),
            "filename_fallback"
        );
        assert_eq!(ExtractionMethod::Emergency.to_string(), "emergency");
    }

    #[test]
    fn test_extraction_method_from_str() {
        assert_eq!(
            "structured".parse::<ExtractionMethod>().unwrap(),
            ExtractionMethod::Structured
        );
        assert_eq!(
            "Byte_Scan".parse::<ExtractionMethod>().unwrap(),
            ExtractionMethod::ByteScanFallback
        );
        assert_eq!(
            "filename_fallback".parse::<ExtractionMethod>().unwrap(),
            ExtractionMethod::FilenameFallback
        );

        assert!("invalid".parse::<ExtractionMethod>().is_err());
    }

    #[test]
    fn test_extraction_method_serialization() {
        let method = ExtractionMethod::ByteScanFallback;
        let json = serde_json::to_string(&method).unwrap();
        assert_eq!(json, "\"byte_scan_fallback\"");

        let method = ExtractionMethod::Emergency;
        let json = serde_json::to_string(&method).unwrap();
        assert_eq!(json, "\"emergency\"");
    }

    #[test]
    fn test_text_quality_serialization() {
        let quality = TextQuality::Excellent;
        let json = serde_json::to_string(&quality).unwrap();
        assert_eq!(json, "\"excellent\"");

        let parsed: TextQuality = serde_json::from_str("\"fair\"").unwrap();
        assert_eq!(parsed, TextQuality::Fair);
    }

    #[test]
    fn test_text_quality_from_str() {
        assert_eq!("poor".parse::<TextQuality>().unwrap(), TextQuality::Poor);
        assert_eq!("GOOD".parse::<TextQuality>().unwrap(), TextQuality::Good);
        assert!("great".parse::<TextQuality>().is_err());
    }
}
