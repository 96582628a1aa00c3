//! 입력 칸(텍스트) 값을 숫자로 읽는다.

/// 입력 칸 해석 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum InputError {
    /// 숫자가 아니거나 유한하지 않은 값
    InvalidNumber { field: String, text: String },
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::InvalidNumber { field, text } => {
                write!(f, "{field}: could not convert '{text}' to a number")
            }
        }
    }
}

impl std::error::Error for InputError {}

/// 입력 칸 문자열을 f64 로 읽는다. 앞뒤 공백은 무시하고 `,` 소수점도 허용한다.
pub fn parse_field(field: &str, text: &str) -> Result<f64, InputError> {
    let normalized = text.trim().replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(InputError::InvalidNumber {
            field: field.to_string(),
            text: text.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_comma_decimal() {
        assert_eq!(parse_field("Uq", " 2,5 ").unwrap(), 2.5);
    }

    #[test]
    fn rejects_text_and_infinity() {
        for bad in ["", "abc", "inf", "NaN", "1.2.3"] {
            let err = parse_field("R1", bad).unwrap_err();
            assert_eq!(
                err,
                InputError::InvalidNumber {
                    field: "R1".into(),
                    text: bad.into()
                }
            );
        }
    }
}
