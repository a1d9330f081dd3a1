use crate::checkout::ValidationError;
use crate::model::{Cart, CheckoutForm, PaymentMethod, UserIdentity};

/// Checks the form on its own and returns the chosen payment method.
///
/// Required fields are checked first, in form order, then the payment method.
pub fn validate_form(form: &CheckoutForm) -> Result<PaymentMethod, ValidationError> {
    if let Some(field) = form.missing_fields().into_iter().next() {
        return Err(ValidationError::MissingField(field));
    }
    form.payment_method.ok_or(ValidationError::MissingPaymentMethod)
}

/// Checks what the form does not hold: something to buy and someone buying it.
pub fn validate_order<'a>(
    cart: &Cart,
    user: Option<&'a UserIdentity>,
) -> Result<&'a UserIdentity, ValidationError> {
    if cart.is_empty() {
        return Err(ValidationError::EmptyCart);
    }
    user.ok_or(ValidationError::NotSignedIn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CheckoutField, Product};
    use rust_decimal::Decimal;

    fn filled_form() -> CheckoutForm {
        CheckoutForm {
            mobile_number: "55 123 456".into(),
            address: "1 Main St".into(),
            city: "Tunis".into(),
            postal_code: "1000".into(),
            country: "TN".into(),
            payment_method: Some(PaymentMethod::CashOnDelivery),
        }
    }

    #[test]
    fn test_first_missing_field_wins() {
        let mut form = filled_form();
        form.city = " ".into();
        form.country.clear();
        form.payment_method = None;
        assert_eq!(
            validate_form(&form),
            Err(ValidationError::MissingField(CheckoutField::City))
        );
    }

    #[test]
    fn test_payment_method_is_required() {
        let mut form = filled_form();
        form.payment_method = None;
        assert_eq!(validate_form(&form), Err(ValidationError::MissingPaymentMethod));
        assert_eq!(validate_form(&filled_form()), Ok(PaymentMethod::CashOnDelivery));
    }

    #[test]
    fn test_order_needs_items_then_user() {
        let user = UserIdentity::new("u1", "Amira");
        let mut cart = Cart::default();
        assert_eq!(validate_order(&cart, None), Err(ValidationError::EmptyCart));

        cart.add_item(&Product::new("A", "Mug", Decimal::from(20)), 1);
        assert_eq!(validate_order(&cart, None), Err(ValidationError::NotSignedIn));
        assert_eq!(validate_order(&cart, Some(&user)), Ok(&user));
    }
}
