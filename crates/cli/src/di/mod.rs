use ens_apt_api::AppState;
use ens_apt_application::ports::{ChainClients, ChainServices};
use ens_apt_application::use_cases::{
    GetProfileUseCase, ListOwnedNamesUseCase, ResolveNameUseCase,
};
use ens_apt_domain::Config;
use ens_apt_infrastructure::{
    AptosViewClient, CcipReadHandler, GraphqlOwnershipIndex, ResponseSigner,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Everything the HTTP layer needs, wired once from configuration.
pub struct GatewayServices {
    chains: Arc<ChainClients>,
    signer: Arc<ResponseSigner>,
    ccip: Arc<CcipReadHandler>,
    get_profile: Arc<GetProfileUseCase>,
    list_names: Arc<ListOwnedNamesUseCase>,
}

impl GatewayServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let view_timeout = Duration::from_millis(config.aptos.view_timeout);
        let indexer_timeout = Duration::from_millis(config.aptos.indexer_timeout);

        let services = config
            .chain_routes()
            .into_iter()
            .map(|route| {
                info!(
                    chain = %route.key,
                    node = %route.aptos_node_url,
                    indexer = %route.indexer_url,
                    resolver = %route.evm_resolver,
                    "Chain configured"
                );
                ChainServices {
                    view: Arc::new(AptosViewClient::new(
                        &route.aptos_node_url,
                        &config.aptos.resolver_module,
                        view_timeout,
                    )),
                    index: Arc::new(GraphqlOwnershipIndex::new(
                        &route.indexer_url,
                        indexer_timeout,
                    )),
                    route,
                }
            })
            .collect();
        let chains = Arc::new(ChainClients::new(services)?);

        let signer = Arc::new(ResponseSigner::new(
            config.signing.private_key.as_deref(),
            config.gateway.protocol,
            Duration::from_secs(config.gateway.signature_ttl),
        )?);

        let suffix = config.gateway_suffix()?;
        let resolve_name = Arc::new(ResolveNameUseCase::new(Arc::clone(&chains), suffix));
        let ccip = Arc::new(CcipReadHandler::new(
            resolve_name,
            Arc::clone(&chains),
            Arc::clone(&signer),
        ));

        Ok(Self {
            get_profile: Arc::new(GetProfileUseCase::new(Arc::clone(&chains))),
            list_names: Arc::new(ListOwnedNamesUseCase::new(
                Arc::clone(&chains),
                config.gateway.native_tld.clone(),
                config.gateway.suffix.clone(),
            )),
            chains,
            signer,
            ccip,
        })
    }

    pub fn chain_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.chains.router().keys().map(|k| k.to_string()).collect();
        keys.sort();
        keys
    }

    pub fn signer_address(&self) -> Option<String> {
        self.signer.address().map(|a| a.to_string())
    }

    pub fn app_state(&self) -> AppState {
        AppState {
            ccip: Arc::clone(&self.ccip),
            get_profile: Arc::clone(&self.get_profile),
            list_names: Arc::clone(&self.list_names),
        }
    }
}
