use anyhow::Result as AnyResult;
use cosmwasm_std::{coin, Addr, Coin, StdResult, Timestamp, Uint128};
use cw_multi_test::{App, AppResponse, BasicApp, Executor};
use mars_owner::OwnerResponse;
use watermelon_types::poll_ledger::{
    Config, ExecuteMsg, InstantiateMsg, Post, PostPageResponse, QueryMsg,
};

use crate::helpers::mock_poll_ledger_contract;

pub const FEE_DENOM: &str = "uwater";
pub const STARTING_BALANCE: u128 = 1_000_000_000;

/// Content of a post as sent by a user
#[derive(Clone, Debug)]
pub struct PostFields {
    pub title: String,
    pub option1_name: String,
    pub option1_image_hash: String,
    pub option2_name: String,
    pub option2_image_hash: String,
}

impl PostFields {
    pub fn new(
        title: &str,
        option1_name: &str,
        option1_image_hash: &str,
        option2_name: &str,
        option2_image_hash: &str,
    ) -> Self {
        Self {
            title: title.to_string(),
            option1_name: option1_name.to_string(),
            option1_image_hash: option1_image_hash.to_string(),
            option2_name: option2_name.to_string(),
            option2_image_hash: option2_image_hash.to_string(),
        }
    }

    pub fn titled(title: &str) -> Self {
        Self {
            title: title.to_string(),
            ..Self::default()
        }
    }
}

impl Default for PostFields {
    fn default() -> Self {
        Self::new("What is better?", "Coffee", "adf2321", "Tea", "adf2321")
    }
}

pub struct MockEnv {
    pub app: BasicApp,
    pub owner: Addr,
    pub ledger_contract: Addr,
}

pub struct MockEnvBuilder {
    pub owner: Addr,
    pub fee_denom: String,
    pub funded_users: Vec<Addr>,
}

#[allow(clippy::new_ret_no_self)]
impl MockEnv {
    pub fn new() -> MockEnvBuilder {
        MockEnvBuilder {
            owner: Addr::unchecked("owner"),
            fee_denom: FEE_DENOM.to_string(),
            funded_users: ["alice", "bob", "carol", "doctor_otto_983"]
                .into_iter()
                .map(Addr::unchecked)
                .collect(),
        }
    }

    //--------------------------------------------------------------------------------------------------
    // Execute Msgs
    //--------------------------------------------------------------------------------------------------

    pub fn add_post(
        &mut self,
        sender: &Addr,
        fields: &PostFields,
        funds: &[Coin],
    ) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            sender.clone(),
            self.ledger_contract.clone(),
            &ExecuteMsg::AddPost {
                title: fields.title.clone(),
                option1_name: fields.option1_name.clone(),
                option1_image_hash: fields.option1_image_hash.clone(),
                option2_name: fields.option2_name.clone(),
                option2_image_hash: fields.option2_image_hash.clone(),
            },
            funds,
        )
    }

    /// Create a post paying exactly the current creation fee, returning its id
    pub fn add_paid_post(&mut self, sender: &Addr, fields: &PostFields) -> u64 {
        let fee = self.post_creation_fee();
        self.add_post(sender, fields, &fee).unwrap();
        self.query_post_length() - 1
    }

    pub fn vote_on_post(
        &mut self,
        sender: &Addr,
        post_id: u64,
        option: u8,
        funds: &[Coin],
    ) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            sender.clone(),
            self.ledger_contract.clone(),
            &ExecuteMsg::VoteOnPost {
                post_id,
                option,
            },
            funds,
        )
    }

    /// Vote paying exactly the current vote fee
    pub fn paid_vote(&mut self, sender: &Addr, post_id: u64, option: u8) -> AnyResult<AppResponse> {
        let fee = self.vote_fee();
        self.vote_on_post(sender, post_id, option, &fee)
    }

    pub fn set_post_creation_fee(
        &mut self,
        sender: &Addr,
        amount: impl Into<Uint128>,
    ) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            sender.clone(),
            self.ledger_contract.clone(),
            &ExecuteMsg::SetPostCreationFee {
                amount: amount.into(),
            },
            &[],
        )
    }

    pub fn set_vote_fee(
        &mut self,
        sender: &Addr,
        amount: impl Into<Uint128>,
    ) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            sender.clone(),
            self.ledger_contract.clone(),
            &ExecuteMsg::SetVoteFee {
                amount: amount.into(),
            },
            &[],
        )
    }

    pub fn set_max_post_ttl(&mut self, sender: &Addr, duration: u64) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            sender.clone(),
            self.ledger_contract.clone(),
            &ExecuteMsg::SetMaxPostTtl {
                duration,
            },
            &[],
        )
    }

    pub fn execute_with_funds(
        &mut self,
        sender: &Addr,
        msg: &ExecuteMsg,
        funds: &[Coin],
    ) -> AnyResult<AppResponse> {
        self.app.execute_contract(sender.clone(), self.ledger_contract.clone(), msg, funds)
    }

    //--------------------------------------------------------------------------------------------------
    // Block
    //--------------------------------------------------------------------------------------------------

    pub fn block_time(&self) -> Timestamp {
        self.app.block_info().time
    }

    pub fn advance_time(&mut self, seconds: u64) {
        self.app.update_block(|block| {
            block.time = block.time.plus_seconds(seconds);
            block.height += 1;
        });
    }

    //--------------------------------------------------------------------------------------------------
    // Queries
    //--------------------------------------------------------------------------------------------------

    pub fn query_ownership(&self) -> OwnerResponse {
        self.app
            .wrap()
            .query_wasm_smart(self.ledger_contract.clone(), &QueryMsg::Owner {})
            .unwrap()
    }

    pub fn query_config(&self) -> Config {
        self.app
            .wrap()
            .query_wasm_smart(self.ledger_contract.clone(), &QueryMsg::Config {})
            .unwrap()
    }

    pub fn query_post_page(&self, page: u32) -> PostPageResponse {
        self.app
            .wrap()
            .query_wasm_smart(
                self.ledger_contract.clone(),
                &QueryMsg::PostPage {
                    page,
                },
            )
            .unwrap()
    }

    pub fn query_post(&self, post_id: u64) -> Post {
        self.try_query_post(post_id).unwrap()
    }

    pub fn try_query_post(&self, post_id: u64) -> StdResult<Post> {
        self.app.wrap().query_wasm_smart(
            self.ledger_contract.clone(),
            &QueryMsg::Post {
                post_id,
            },
        )
    }

    pub fn query_post_length(&self) -> u64 {
        self.app
            .wrap()
            .query_wasm_smart(self.ledger_contract.clone(), &QueryMsg::PostLength {})
            .unwrap()
    }

    pub fn query_vote(&self, post_id: u64, voter: &Addr) -> Option<u8> {
        self.app
            .wrap()
            .query_wasm_smart(
                self.ledger_contract.clone(),
                &QueryMsg::Vote {
                    post_id,
                    voter: voter.to_string(),
                },
            )
            .unwrap()
    }

    pub fn query_balance(&self, addr: &Addr) -> Uint128 {
        self.app.wrap().query_balance(addr, FEE_DENOM).unwrap().amount
    }

    //--------------------------------------------------------------------------------------------------
    // Fees as coins
    //--------------------------------------------------------------------------------------------------

    pub fn post_creation_fee(&self) -> Vec<Coin> {
        let config = self.query_config();
        fee_coins(config.post_creation_fee, &config.fee_denom)
    }

    pub fn vote_fee(&self) -> Vec<Coin> {
        let config = self.query_config();
        fee_coins(config.vote_fee, &config.fee_denom)
    }
}

/// The bank module refuses zero-amount transfers, so a zero fee is paid by sending nothing
fn fee_coins(amount: Uint128, denom: &str) -> Vec<Coin> {
    if amount.is_zero() {
        vec![]
    } else {
        vec![coin(amount.u128(), denom)]
    }
}

impl MockEnvBuilder {
    pub fn build(&mut self) -> AnyResult<MockEnv> {
        let mut app = App::new(|router, _, storage| {
            for user in self.funded_users.iter().chain([&self.owner]) {
                router
                    .bank
                    .init_balance(
                        storage,
                        user,
                        vec![coin(STARTING_BALANCE, FEE_DENOM), coin(STARTING_BALANCE, "uatom")],
                    )
                    .unwrap();
            }
        });

        let code_id = app.store_code(mock_poll_ledger_contract());

        let ledger_contract = app.instantiate_contract(
            code_id,
            self.owner.clone(),
            &InstantiateMsg {
                owner: self.owner.to_string(),
                fee_denom: self.fee_denom.clone(),
            },
            &[],
            "mock-poll-ledger-contract",
            None,
        )?;

        Ok(MockEnv {
            app,
            owner: self.owner.clone(),
            ledger_contract,
        })
    }

    //--------------------------------------------------------------------------------------------------
    // Setter functions
    //--------------------------------------------------------------------------------------------------

    pub fn owner(&mut self, owner: &str) -> &mut Self {
        self.owner = Addr::unchecked(owner);
        self
    }

    pub fn fee_denom(&mut self, denom: &str) -> &mut Self {
        self.fee_denom = denom.to_string();
        self
    }
}
