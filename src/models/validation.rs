use rust_decimal::Decimal;

use crate::{errors::ValidationError, models::channel::Channel};

pub fn validate_recipient(channel: Channel, recipient: &str) -> Result<(), ValidationError> {
    if recipient.trim().is_empty() {
        return Err(ValidationError::EmptyRecipient { channel });
    }

    Ok(())
}

pub fn validate_amount(amount: Decimal) -> Result<(), ValidationError> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(ValidationError::NegativeAmount { amount });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_recipients() {
        for recipient in ["", "   ", "\t"] {
            assert_eq!(
                validate_recipient(Channel::Sms, recipient),
                Err(ValidationError::EmptyRecipient {
                    channel: Channel::Sms
                })
            );
        }
        assert!(validate_recipient(Channel::Sms, "+5511999999999").is_ok());
    }

    #[test]
    fn rejects_negative_amounts_only() {
        assert_eq!(
            validate_amount(Decimal::NEGATIVE_ONE),
            Err(ValidationError::NegativeAmount {
                amount: Decimal::NEGATIVE_ONE
            })
        );
        assert!(validate_amount(Decimal::ZERO).is_ok());
        assert!(validate_amount(Decimal::new(15000, 2)).is_ok());
    }
}
