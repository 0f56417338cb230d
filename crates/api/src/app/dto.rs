use serde::Deserialize;

use cadastro_suppliers::{Contact, Supplier};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Body shared by create and update; any supplied id is ignored (identity is
/// path-driven on update and store-assigned on create).
#[derive(Debug, Deserialize)]
pub struct SupplierRequest {
    pub name: String,
    pub cnpj: String,
    pub contact: ContactRequest,
}

impl SupplierRequest {
    pub fn into_supplier(self) -> Supplier {
        Supplier::new(
            self.name,
            self.cnpj,
            Contact {
                name: self.contact.name,
                email: self.contact.email,
                phone: self.contact.phone,
            },
        )
    }
}

// -------------------------
// Response mapping
// -------------------------

pub fn supplier_to_json(supplier: &Supplier) -> serde_json::Value {
    serde_json::json!({
        "id": supplier.id.map(i64::from),
        "name": supplier.name,
        "cnpj": supplier.cnpj,
        "contact": {
            "name": supplier.contact.name,
            "email": supplier.contact.email,
            "phone": supplier.contact.phone,
        },
    })
}
