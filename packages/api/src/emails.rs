// ABOUTME: HTML bodies for the notification emails
// ABOUTME: Admin copies of leads/quotes, customer confirmations, event notices

use sunward_inquiries::{Lead, QuoteRequest};

fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn field_row(label: &str, value: &str) -> String {
    format!("<p><strong>{}:</strong> {}</p>", label, escape_html(value))
}

/// Admin copy of a new contact-form lead.
pub fn lead_admin_notice(lead: &Lead) -> (String, String) {
    let subject = format!("New lead: {}", lead.name);

    let mut html = String::from("<h2>New website lead</h2>");
    html.push_str(&field_row("Name", &lead.name));
    html.push_str(&field_row("Email", &lead.email));
    html.push_str(&field_row("Phone", &lead.phone));
    html.push_str(&field_row("Parish", &lead.parish));
    html.push_str(&field_row("District", &lead.district));
    html.push_str(&field_row("Interest", lead.interest.as_str()));
    if let Some(message) = &lead.message {
        html.push_str(&field_row("Message", message));
    }

    (subject, html)
}

/// Admin copy of a new quote request, listing the chosen products.
pub fn quote_admin_notice(quote: &QuoteRequest) -> (String, String) {
    let subject = format!("New quote request: {}", quote.name);

    let mut html = String::from("<h2>New quote request</h2>");
    html.push_str(&field_row("Name", &quote.name));
    html.push_str(&field_row("Email", &quote.email));
    html.push_str(&field_row("Phone", &quote.phone));
    html.push_str(&field_row("Parish", &quote.parish));
    html.push_str(&field_row("District", &quote.district));
    html.push_str(&field_row("Interest", quote.interest.as_str()));

    if quote.products.is_empty() {
        html.push_str("<p><strong>Products:</strong> none selected</p>");
    } else {
        html.push_str("<p><strong>Products:</strong></p><ul>");
        for product_id in &quote.products {
            html.push_str(&format!("<li>{}</li>", escape_html(product_id)));
        }
        html.push_str("</ul>");
    }

    if let Some(description) = &quote.service_description {
        html.push_str(&field_row("Service description", description));
    }
    if let Some(message) = &quote.message {
        html.push_str(&field_row("Message", message));
    }

    (subject, html)
}

/// Confirmation back to the customer acknowledging receipt.
pub fn quote_confirmation(quote: &QuoteRequest) -> (String, String) {
    let subject = "We received your quote request".to_string();

    let html = format!(
        "<h2>Thank you, {}!</h2>\
         <p>We have received your quote request and our team will be in \
         touch shortly with pricing and next steps.</p>\
         <p>Reference: {}</p>",
        escape_html(&quote.name),
        quote.id
    );

    (subject, html)
}

/// Operator notice for the free-form order/receipt/invoice submissions.
pub fn event_notice(kind: &str, payload: &serde_json::Value) -> (String, String) {
    let subject = format!("Website submission: {}", kind);

    let pretty =
        serde_json::to_string_pretty(payload).unwrap_or_else(|_| payload.to_string());
    let html = format!(
        "<h2>{}</h2><pre>{}</pre>",
        escape_html(kind),
        escape_html(&pretty)
    );

    (subject, html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sunward_inquiries::Interest;

    fn sample_quote() -> QuoteRequest {
        QuoteRequest {
            id: "q-1".to_string(),
            name: "Jane <script>".to_string(),
            email: "jane@example.com".to_string(),
            phone: "876-555-0101".to_string(),
            parish: "St. Andrew".to_string(),
            district: "Kingston".to_string(),
            interest: Interest::Quote,
            products: vec!["prod-1".to_string(), "prod-2".to_string()],
            service_description: None,
            message: None,
            status: "pending".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_quote_admin_notice_lists_products() {
        let (subject, html) = quote_admin_notice(&sample_quote());
        assert!(subject.contains("Jane"));
        assert!(html.contains("<li>prod-1</li>"));
        assert!(html.contains("<li>prod-2</li>"));
    }

    #[test]
    fn test_html_is_escaped() {
        let (_, html) = quote_admin_notice(&sample_quote());
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_event_notice_embeds_payload() {
        let payload = serde_json::json!({"item": "inverter", "qty": 2});
        let (subject, html) = event_notice("New order submission", &payload);
        assert!(subject.contains("New order submission"));
        assert!(html.contains("inverter"));
    }
}
