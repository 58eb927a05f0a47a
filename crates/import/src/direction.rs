use sverka_core::{
    CompanyIdentity, Confidence, Direction, OperationDirectionResult, ParsedDocument,
};

/// Narration words that point at money leaving the company.
pub const EXPENSE_KEYWORDS: &[&str] = &[
    "комиссия",
    "штраф",
    "пеня",
    "налог",
    "взнос",
    "уплата",
    "перечисление",
];

/// Narration words that point at money entering the company.
pub const INCOME_KEYWORDS: &[&str] = &[
    "поступление",
    "возврат",
    "возмещение",
    "компенсация",
    "зачисление",
];

/// Which sides of a document belong to the company, and why.
#[derive(Debug, Default)]
struct Ownership {
    payer: Vec<&'static str>,
    receiver: Vec<&'static str>,
}

impl Ownership {
    fn of(doc: &ParsedDocument, company: &CompanyIdentity) -> Self {
        let mut own = Ownership::default();
        if company.owns_inn(doc.payer_inn.as_deref()) {
            own.payer.push("payer tax id matches the company tax id");
        }
        if company.owns_account(doc.payer_account.as_deref()) {
            own.payer.push("payer account is one of the company accounts");
        }
        if company.owns_inn(doc.receiver_inn.as_deref()) {
            own.receiver.push("receiver tax id matches the company tax id");
        }
        if company.owns_account(doc.receiver_account.as_deref()) {
            own.receiver.push("receiver account is one of the company accounts");
        }
        own
    }
}

/// Infers the direction of `doc` against a pre-normalized company identity.
///
/// Ownership evidence is decisive and checked first; the narration keyword
/// scan only runs when neither side can be attributed to the company.
pub fn resolve_direction(
    doc: &ParsedDocument,
    company: &CompanyIdentity,
) -> OperationDirectionResult {
    let own = Ownership::of(doc, company);

    let by_ownership = match (own.payer.is_empty(), own.receiver.is_empty()) {
        (false, false) => Some(Direction::Transfer),
        (false, true) => Some(Direction::Expense),
        (true, false) => Some(Direction::Income),
        (true, true) => None,
    };
    if let Some(direction) = by_ownership {
        let reasons = own
            .payer
            .into_iter()
            .chain(own.receiver)
            .map(str::to_string)
            .collect();
        if let Some(result) =
            OperationDirectionResult::determined(direction, Confidence::High, reasons)
        {
            tracing::debug!(%direction, "direction resolved by ownership");
            return result;
        }
    }

    let purpose = doc.purpose_text().to_lowercase();
    let expense = EXPENSE_KEYWORDS.iter().find(|k| purpose.contains(*k));
    let income = INCOME_KEYWORDS.iter().find(|k| purpose.contains(*k));
    let by_keyword = match (expense, income) {
        (Some(k), None) => Some((Direction::Expense, k)),
        (None, Some(k)) => Some((Direction::Income, k)),
        // Both lists matching is left undetermined on purpose.
        _ => None,
    };
    if let Some((direction, keyword)) = by_keyword {
        let reason = format!("purpose contains {direction} keyword \"{keyword}\"");
        if let Some(result) =
            OperationDirectionResult::determined(direction, Confidence::Medium, vec![reason])
        {
            tracing::debug!(%direction, keyword, "direction resolved by purpose keyword");
            return result;
        }
    }

    OperationDirectionResult::undetermined()
}

/// Convenience form taking the raw company tax id and account list.
pub fn determine_operation_direction(
    doc: &ParsedDocument,
    company_inn: Option<&str>,
    company_accounts: Option<&[String]>,
) -> OperationDirectionResult {
    let company = CompanyIdentity::new(company_inn, company_accounts.unwrap_or_default());
    resolve_direction(doc, &company)
}
