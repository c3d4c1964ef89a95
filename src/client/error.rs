use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("failed to fetch products")]
    FetchProducts,
    #[error("failed to fetch product")]
    FetchProduct,
    #[error("failed to create product")]
    CreateProduct,
    /// The request never got a usable response (connection refused, DNS,
    /// unreadable body).
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

impl ClientError {
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Transport(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_messages_name_the_operation() {
        assert_eq!(ClientError::FetchProducts.to_string(), "failed to fetch products");
        assert_eq!(ClientError::FetchProduct.to_string(), "failed to fetch product");
        assert_eq!(ClientError::CreateProduct.to_string(), "failed to create product");
        assert!(!ClientError::CreateProduct.is_transport());
    }
}
