use blockfrost_node_common::{pagination::PaginationStyle, transport::HttpMethod};

use super::{Backend, BodyKind, Category, OperationDefinition};
use crate::fields::Field;

const DREP: OperationDefinition = OperationDefinition {
    category: Category::Governance,
    operation: "",
    name: "",
    description: "",
    method: HttpMethod::Get,
    path: "/governance/dreps/{drepId}",
    fields: &[Field::DrepId],
    non_empty: &[],
    pagination: PaginationStyle::None,
    backend: Backend::Direct,
    body: BodyKind::None,
};

const PROPOSAL: OperationDefinition = OperationDefinition {
    path: "/governance/proposals/{txHash}/{certIndex}",
    fields: &[Field::TxHash, Field::CertIndex],
    ..DREP
};

pub(super) const OPERATIONS: &[OperationDefinition] = &[
    OperationDefinition {
        operation: "getDreps",
        name: "Get DReps",
        description: "Return the information about Delegate Representatives",
        path: "/governance/dreps",
        fields: &[],
        pagination: PaginationStyle::CountPageOrder,
        ..DREP
    },
    OperationDefinition {
        operation: "getDrep",
        name: "Get DRep",
        description: "Return the information about a specific Delegate Representative",
        ..DREP
    },
    OperationDefinition {
        operation: "getDrepDelegators",
        name: "Get DRep Delegators",
        description: "List of delegators of a specific DRep",
        path: "/governance/dreps/{drepId}/delegators",
        pagination: PaginationStyle::CountPageOrder,
        ..DREP
    },
    OperationDefinition {
        operation: "getDrepMetadata",
        name: "Get DRep Metadata",
        description: "Return the metadata of a specific DRep",
        path: "/governance/dreps/{drepId}/metadata",
        ..DREP
    },
    OperationDefinition {
        operation: "getDrepUpdates",
        name: "Get DRep Updates",
        description: "List of certificate updates to the DRep",
        path: "/governance/dreps/{drepId}/updates",
        pagination: PaginationStyle::CountPageOrder,
        ..DREP
    },
    OperationDefinition {
        operation: "getDrepVotes",
        name: "Get DRep Votes",
        description: "History of DRep votes",
        path: "/governance/dreps/{drepId}/votes",
        pagination: PaginationStyle::CountPageOrder,
        ..DREP
    },
    OperationDefinition {
        operation: "getProposals",
        name: "Get Proposals",
        description: "Return the information about governance proposals",
        path: "/governance/proposals",
        fields: &[],
        pagination: PaginationStyle::CountPageOrder,
        ..DREP
    },
    OperationDefinition {
        operation: "getProposal",
        name: "Get Proposal",
        description: "Return the information about a specific governance proposal",
        ..PROPOSAL
    },
    OperationDefinition {
        operation: "getProposalParameters",
        name: "Get Proposal Parameters",
        description: "Parameters proposed by a parameter change proposal",
        path: "/governance/proposals/{txHash}/{certIndex}/parameters",
        ..PROPOSAL
    },
    OperationDefinition {
        operation: "getProposalWithdrawals",
        name: "Get Proposal Withdrawals",
        description: "Withdrawals proposed by a treasury withdrawal proposal",
        path: "/governance/proposals/{txHash}/{certIndex}/withdrawals",
        pagination: PaginationStyle::CountPageOrder,
        ..PROPOSAL
    },
    OperationDefinition {
        operation: "getProposalVotes",
        name: "Get Proposal Votes",
        description: "History of votes cast on a proposal",
        path: "/governance/proposals/{txHash}/{certIndex}/votes",
        pagination: PaginationStyle::CountPageOrder,
        ..PROPOSAL
    },
    OperationDefinition {
        operation: "getProposalMetadata",
        name: "Get Proposal Metadata",
        description: "Metadata attached to a proposal",
        path: "/governance/proposals/{txHash}/{certIndex}/metadata",
        ..PROPOSAL
    },
];
