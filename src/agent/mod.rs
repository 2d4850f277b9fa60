mod agent_error;
mod prompts;
mod property_agent;
mod urls;

pub use agent_error::AgentError;
pub use property_agent::{PropertyAgent, PropertyReport, TrendReport};
pub use urls::{listing_urls, trends_url};
