use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// How the customer pays. Serialized with the labels the order endpoint expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "Credit Card")]
    CreditCard,
    #[serde(rename = "Cash on Delivery")]
    CashOnDelivery,
}

impl Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentMethod::CreditCard => f.write_str("Credit Card"),
            PaymentMethod::CashOnDelivery => f.write_str("Cash on Delivery"),
        }
    }
}

/// The required text fields of the checkout form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutField {
    MobileNumber,
    Address,
    City,
    PostalCode,
    Country,
}

impl CheckoutField {
    pub const ALL: [CheckoutField; 5] = [
        CheckoutField::MobileNumber,
        CheckoutField::Address,
        CheckoutField::City,
        CheckoutField::PostalCode,
        CheckoutField::Country,
    ];
}

impl Display for CheckoutField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            CheckoutField::MobileNumber => "mobile number",
            CheckoutField::Address => "address",
            CheckoutField::City => "city",
            CheckoutField::PostalCode => "postal code",
            CheckoutField::Country => "country",
        };
        f.write_str(label)
    }
}

/// Shipping and payment details typed into the checkout form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckoutForm {
    pub mobile_number: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
    pub payment_method: Option<PaymentMethod>,
}

impl CheckoutForm {
    pub fn field(&self, field: CheckoutField) -> &str {
        match field {
            CheckoutField::MobileNumber => &self.mobile_number,
            CheckoutField::Address => &self.address,
            CheckoutField::City => &self.city,
            CheckoutField::PostalCode => &self.postal_code,
            CheckoutField::Country => &self.country,
        }
    }

    pub fn set_field(&mut self, field: CheckoutField, value: impl Into<String>) {
        let slot = match field {
            CheckoutField::MobileNumber => &mut self.mobile_number,
            CheckoutField::Address => &mut self.address,
            CheckoutField::City => &mut self.city,
            CheckoutField::PostalCode => &mut self.postal_code,
            CheckoutField::Country => &mut self.country,
        };
        *slot = value.into();
    }

    /// Required fields that are empty or whitespace, in form order.
    pub fn missing_fields(&self) -> Vec<CheckoutField> {
        CheckoutField::ALL
            .into_iter()
            .filter(|f| self.field(*f).trim().is_empty())
            .collect()
    }

    pub fn shipping_address(&self) -> ShippingAddress {
        ShippingAddress {
            address: self.address.trim().to_string(),
            city: self.city.trim().to_string(),
            postal_code: self.postal_code.trim().to_string(),
            country: self.country.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}
