use crate::errors::{AccountsError, Result};
use crate::models::grades::entities::{GRADE_LEVEL_MAX, GRADE_LEVEL_MIN, GRADE_NAME_MAX_LENGTH};

pub fn validate_grade_name(name: &str) -> Result<()> {
    // 名称必填，按字符计数：1 <= x <= 2
    let len = name.chars().count();
    if len == 0 {
        return Err(AccountsError::validation("Grade name must not be empty"));
    }
    if len > GRADE_NAME_MAX_LENGTH {
        return Err(AccountsError::validation(format!(
            "Grade name must be at most {GRADE_NAME_MAX_LENGTH} characters, got {len}"
        )));
    }
    Ok(())
}

pub fn validate_grade_level(level: i32) -> Result<()> {
    if !(GRADE_LEVEL_MIN..=GRADE_LEVEL_MAX).contains(&level) {
        return Err(AccountsError::validation(format!(
            "Grade level must be between {GRADE_LEVEL_MIN} and {GRADE_LEVEL_MAX}, got {level}"
        )));
    }
    Ok(())
}
