// crates/shared-kernel/src/domain/entities/entity.rs

use crate::errors::DomainError;

pub trait EntityMetadata {
    fn entity_name() -> &'static str;

    fn not_found<I: ToString>(id: I) -> DomainError {
        DomainError::NotFound {
            entity: Self::entity_name(),
            id: id.to_string(),
        }
    }
}

pub trait EntityOptionExt<T> {
    fn ok_or_not_found<I: ToString>(self, id: I) -> Result<T, DomainError>
    where
        T: EntityMetadata;
}

impl<T> EntityOptionExt<T> for Option<T> {
    fn ok_or_not_found<I: ToString>(self, id: I) -> Result<T, DomainError>
    where
        T: EntityMetadata,
    {
        self.ok_or_else(|| T::not_found(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Car;

    impl EntityMetadata for Car {
        fn entity_name() -> &'static str {
            "Car"
        }
    }

    #[test]
    fn test_ok_or_not_found_names_the_entity() {
        let err = None::<Car>.ok_or_not_found("c1").err();

        assert_eq!(
            err,
            Some(DomainError::NotFound {
                entity: "Car",
                id: "c1".to_string(),
            })
        );
    }

    #[test]
    fn test_ok_or_not_found_keeps_the_value() {
        assert!(Some(Car).ok_or_not_found("c1").is_ok());
    }
}
