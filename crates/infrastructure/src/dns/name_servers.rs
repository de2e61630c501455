use async_trait::async_trait;
use ferrous_axfr_application::ports::NameServerResolver;
use ferrous_axfr_domain::config::NsLookupConfig;
use ferrous_axfr_domain::{DomainError, DomainName, NameServer};
use hickory_resolver::config::{NameServerConfigGroup, ResolverConfig};
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::{Resolver, TokioResolver};
use tracing::{debug, info, warn};

/// Discovers the NS RRset of a domain through a recursive resolver.
pub struct HickoryNameServerResolver {
    resolver: TokioResolver,
}

impl HickoryNameServerResolver {
    /// Uses the configured name servers, or the system resolver
    /// configuration when none are given. An unreadable system
    /// configuration falls back to hickory's default upstreams.
    pub fn from_config(config: &NsLookupConfig) -> Self {
        let mut builder = if config.uses_system_config() {
            match TokioResolver::builder_tokio() {
                Ok(builder) => builder,
                Err(e) => {
                    warn!(error = %e, "System resolver configuration unavailable, using defaults");
                    Resolver::builder_with_config(
                        ResolverConfig::default(),
                        TokioConnectionProvider::default(),
                    )
                }
            }
        } else {
            info!(
                nameservers = ?config.nameservers,
                port = config.port,
                "Using configured name servers for NS lookups"
            );
            let group =
                NameServerConfigGroup::from_ips_clear(&config.nameservers, config.port, true);
            Resolver::builder_with_config(
                ResolverConfig::from_parts(None, vec![], group),
                TokioConnectionProvider::default(),
            )
        };

        let options = builder.options_mut();
        options.timeout = config.timeout();
        options.attempts = config.attempts;

        Self {
            resolver: builder.build(),
        }
    }
}

#[async_trait]
impl NameServerResolver for HickoryNameServerResolver {
    async fn resolve_ns(&self, domain: &DomainName) -> Result<Vec<NameServer>, DomainError> {
        match self.resolver.ns_lookup(domain.to_fqdn()).await {
            Ok(lookup) => {
                let servers: Vec<NameServer> = lookup
                    .iter()
                    .map(|ns| NameServer::new(ns.0.to_utf8()))
                    .collect();

                debug!(domain = %domain, servers = servers.len(), "NS lookup answered");

                if servers.is_empty() {
                    Err(DomainError::NoNameServers(domain.to_string()))
                } else {
                    Ok(servers)
                }
            }
            Err(e) if e.is_no_records_found() || e.is_nx_domain() => {
                debug!(domain = %domain, error = %e, "NS lookup returned no records");
                Err(DomainError::NoNameServers(domain.to_string()))
            }
            Err(e) => Err(DomainError::NameServerLookup(e.to_string())),
        }
    }
}
