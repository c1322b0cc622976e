//! Campaigns and saved templates.

mod model;

pub use model::{
    CUSTOM_TEMPLATE, Campaign, CampaignDraft, CampaignId, CampaignStatus, Template, TemplateId,
    UNTITLED_CAMPAIGN,
};
