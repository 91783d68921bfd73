//! # 문자열 유틸리티
//! 
//! 설정값과 컬렉션 이름 처리에 쓰이는 공통 문자열 함수들입니다.

use serde::Deserialize;
use crate::errors::AppError;

/// 필수 문자열 필드 검증 및 정리
/// 
/// 빈 문자열이나 공백만 있는 경우 ValidationError를 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 반환합니다.
/// 
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::validate_required_string;
/// 
/// assert_eq!(validate_required_string("  orders  ", "collection").unwrap(), "orders");
/// assert!(validate_required_string("   ", "collection").is_err());
/// ```
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(
            format!("{}은(는) 필수입니다", field_name)
        ));
    }
    Ok(trimmed.to_string())
}

/// 선택적 문자열 필드 정리
/// 
/// None 값이거나 빈 문자열/공백만 있는 경우 None을 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 Some 옵션으로 반환합니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 선택적 문자열 필드를 위한 serde deserializer
/// 
/// 빈 문자열이나 공백만 있는 문자열을 None으로 변환합니다.
/// 설정 파일에서 `"password": ""`처럼 비워 둔 값을 누락으로 취급할 때 사용됩니다.
/// 필드 자체가 없을 수 있다면 `#[serde(default)]`와 함께 지정해야 합니다.
/// 
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct RawConfig {
///     #[serde(default, deserialize_with = "deserialize_optional_string")]
///     user: Option<String>,
/// }
/// ```
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

/// 빈 문자열만 None으로 바꾸고 나머지는 그대로 둡니다
///
/// 비밀번호처럼 앞뒤 공백도 값의 일부인 필드에 사용합니다.
pub fn non_empty_string(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// [`non_empty_string`]을 적용하는 serde deserializer
pub fn deserialize_non_empty_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(non_empty_string(opt))
}

/// MongoDB 컬렉션 이름 검증
/// 
/// 드라이버로 넘기기 전에 서버가 거부할 이름을 걸러냅니다.
/// 
/// # 규칙
/// * 비어 있거나 공백만 있으면 안 됨
/// * `$` 문자와 NUL 문자를 포함할 수 없음
/// * `system.` 접두사는 예약됨
/// 
/// # 반환값
/// * `Ok(String)` - 앞뒤 공백이 제거된 컬렉션 이름
/// * `Err(AppError::ValidationError)` - 규칙 위반
pub fn validate_collection_name(name: &str) -> Result<String, AppError> {
    let name = validate_required_string(name, "컬렉션 이름")?;

    if name.contains('$') || name.contains('\0') {
        return Err(AppError::ValidationError(
            format!("컬렉션 이름에 사용할 수 없는 문자가 포함되어 있습니다: {}", name)
        ));
    }

    if name.starts_with("system.") {
        return Err(AppError::ValidationError(
            format!("예약된 컬렉션 이름입니다: {}", name)
        ));
    }

    Ok(name)
}
