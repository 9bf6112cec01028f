use serde::de::Error as _;
use serde_aux::field_attributes::deserialize_number_from_string;

/// A loan applicant as submitted to `/loan_eligibility`.
///
/// `employment_status` is an open set of strings; only the policy decides
/// which values qualify. Only a JSON object is accepted, never the
/// positional array form serde would otherwise allow.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(try_from = "serde_json::Map<String, serde_json::Value>")]
pub struct Applicant {
    pub income: f64,
    pub age: i64,
    pub employment_status: String,
}

#[derive(serde::Deserialize)]
struct ApplicantFields {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    income: f64,
    #[serde(deserialize_with = "deserialize_whole_number")]
    age: i64,
    employment_status: String,
}

impl TryFrom<serde_json::Map<String, serde_json::Value>> for Applicant {
    type Error = serde_json::Error;

    fn try_from(fields: serde_json::Map<String, serde_json::Value>) -> Result<Self, Self::Error> {
        let fields: ApplicantFields = serde_json::from_value(serde_json::Value::Object(fields))?;
        Ok(Self {
            income: fields.income,
            age: fields.age,
            employment_status: fields.employment_status,
        })
    }
}

/// Integers, floats without a fractional part (`25.0`) and numeric strings
/// (`"25"`, `"25.0"`).
fn deserialize_whole_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(serde::Deserialize)]
    #[serde(untagged)]
    enum Number {
        Integer(i64),
        Float(f64),
        Text(String),
    }

    let whole = |f: f64| {
        if f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
            Ok(f as i64)
        } else {
            Err(D::Error::custom(format!("{} is not a whole number", f)))
        }
    };

    match <Number as serde::Deserialize>::deserialize(deserializer)? {
        Number::Integer(i) => Ok(i),
        Number::Float(f) => whole(f),
        Number::Text(s) => match s.trim().parse::<i64>() {
            Ok(i) => Ok(i),
            Err(_) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| D::Error::custom(format!("{:?} is not a whole number", s)))
                .and_then(whole),
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct EligibilityDecision {
    pub eligible: bool,
}
