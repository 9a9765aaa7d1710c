//! Plain-text subject/body templates for lead notifications.

use medifab_core::lead::{Lead, LeadMetadata, LeadSource};

fn form_label(source: LeadSource) -> &'static str {
    match source {
        LeadSource::Quote => "Quote request",
        LeadSource::Survey => "Site survey request",
        LeadSource::Contact => "Contact form message",
    }
}

/// Full lead details, sent to the fixed admin address.
pub fn admin_alert(lead: &Lead) -> (String, String) {
    let subject = format!("[medifab] New lead #{}: {}", lead.id, form_label(lead.source()));

    let mut body = format!(
        "{label}\n\nName: {name}\nEmail: {email}\n",
        label = form_label(lead.source()),
        name = lead.name,
        email = lead.email,
    );
    if !lead.phone.is_empty() {
        body.push_str(&format!("Phone: {}\n", lead.phone));
    }
    if !lead.company.is_empty() {
        body.push_str(&format!("Organization: {}\n", lead.company));
    }

    match &lead.metadata {
        LeadMetadata::Quote {
            project_type,
            floor_plan_media_id,
            ..
        } => {
            if let Some(project_type) = project_type {
                body.push_str(&format!("Project type: {project_type}\n"));
            }
            if floor_plan_media_id.is_some() {
                body.push_str("Floor plan: attached (see media library)\n");
            }
        }
        LeadMetadata::Survey {
            location,
            preferred_date,
            preferred_time,
            ..
        } => {
            body.push_str(&format!("Location: {location}\n"));
            body.push_str(&format!("Preferred date: {preferred_date}\n"));
            if let Some(preferred_time) = preferred_time {
                body.push_str(&format!("Preferred time: {preferred_time}\n"));
            }
        }
        LeadMetadata::Contact { .. } => {}
    }

    body.push_str(&format!("\nMessage:\n{}\n", lead.message));
    (subject, body)
}

/// Short acknowledgement, sent back to the submitter.
pub fn confirmation(lead: &Lead) -> (String, String) {
    let subject = match lead.source() {
        LeadSource::Quote => "We received your quote request",
        LeadSource::Survey => "We received your site survey request",
        LeadSource::Contact => "We received your message",
    }
    .to_string();

    let body = format!(
        "Hello {name},\n\nThank you for reaching out. Our team has received your \
         {label} and will get back to you within one business day.\n\n\
         Regards,\nThe medifab team\n",
        name = lead.name,
        label = form_label(lead.source()).to_lowercase(),
    );
    (subject, body)
}
