use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateCommentDTO {
    /// Client-chosen id. Honored verbatim unless absent or 0.
    pub id: Option<i32>,
    pub name: Option<String>,
    pub text: String,
    pub password: String,
}

impl CreateCommentDTO {
    pub fn requested_id(&self) -> Option<i32> {
        self.id.filter(|&id| id != 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_id_means_auto_assign() {
        let dto: CreateCommentDTO =
            serde_json::from_str(r#"{"id":0,"text":"rest well","password":"pw"}"#).unwrap();
        assert_eq!(dto.requested_id(), None);

        let dto: CreateCommentDTO =
            serde_json::from_str(r#"{"id":42,"text":"rest well","password":"pw"}"#).unwrap();
        assert_eq!(dto.requested_id(), Some(42));
    }

    #[test]
    fn text_and_password_are_required() {
        assert!(serde_json::from_str::<CreateCommentDTO>(r#"{"password":"pw"}"#).is_err());
        assert!(serde_json::from_str::<CreateCommentDTO>(r#"{"text":"hi"}"#).is_err());
    }
}
