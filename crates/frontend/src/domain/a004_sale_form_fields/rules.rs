use contracts::shared::allow_list::{AllowList, FieldCheck};

/// Messages of a sale form field checked against an allow-list
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldRule {
    pub message: &'static str,
    /// Label of the single corrective action
    pub fix_label: &'static str,
}

pub const BANK_ACCOUNT_RULE: FieldRule = FieldRule {
    message: "La cuenta ingresada no existe, porfavor verificar",
    fix_label: "Corregir Número de cuenta",
};

pub const PAYMENT_METHOD_RULE: FieldRule = FieldRule {
    message: "El metodo de pago no existe",
    fix_label: "Corregir metodo de pago",
};

impl FieldRule {
    /// True when `value` must be rejected; blank input is never checked
    pub fn rejects(&self, allowed: &AllowList, value: &str) -> bool {
        allowed.check(value) == FieldCheck::Unknown
    }
}

/// Value of a checked field and whether its error dialog is open
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldEntry {
    pub value: String,
    pub invalid: bool,
}

impl FieldEntry {
    pub fn input(&mut self, value: String) {
        self.value = value;
    }

    /// Store a committed value; an unknown one opens the error dialog
    pub fn commit(&mut self, rule: &FieldRule, allowed: &AllowList, value: String) -> bool {
        self.invalid = rule.rejects(allowed, &value);
        self.value = value;
        self.invalid
    }

    /// Every way out of the error dialog clears the rejected value
    pub fn dismiss(&mut self) {
        self.value.clear();
        self.invalid = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_unknown_non_empty_values_are_rejected() {
        let banks = AllowList::from_values(["001-123", "002-456"]);

        assert!(!BANK_ACCOUNT_RULE.rejects(&banks, ""));
        assert!(!BANK_ACCOUNT_RULE.rejects(&banks, "001-123"));
        assert!(BANK_ACCOUNT_RULE.rejects(&banks, "999"));
        assert!(BANK_ACCOUNT_RULE.rejects(&banks, "001-123 "));
    }

    #[test]
    fn empty_allow_list_rejects_everything_typed() {
        let methods = AllowList::default();
        assert!(PAYMENT_METHOD_RULE.rejects(&methods, "Transferencia"));
        assert!(!PAYMENT_METHOD_RULE.rejects(&methods, ""));
    }

    #[test]
    fn closing_the_error_clears_the_rejected_value() {
        let banks = AllowList::from_values(["001-123"]);
        let mut entry = FieldEntry::default();

        assert!(entry.commit(&BANK_ACCOUNT_RULE, &banks, "999".to_string()));
        assert_eq!(entry.value, "999");

        entry.dismiss();
        assert_eq!(entry, FieldEntry::default());
    }

    #[test]
    fn accepted_value_stays_and_keeps_dialog_closed() {
        let methods = AllowList::from_values(["Transferencia"]);
        let mut entry = FieldEntry::default();

        assert!(!entry.commit(&PAYMENT_METHOD_RULE, &methods, "Transferencia".to_string()));
        assert!(!entry.invalid);
        assert_eq!(entry.value, "Transferencia");
    }
}
