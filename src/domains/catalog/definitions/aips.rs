//! AIPS (AI-powered information processing) documentation.

use super::{NamespaceDefinition, TopicDefinition};
use crate::domains::catalog::identifier::Namespace;

/// AIPS namespace definition.
pub struct AipsDocs;

impl NamespaceDefinition for AipsDocs {
    const NAMESPACE: Namespace = Namespace::Aips;
    const NOT_FOUND: &'static str = "AIPS 프로젝트 정보를 찾을 수 없습니다.";

    fn topics() -> Vec<TopicDefinition> {
        vec![
            TopicDefinition {
                topic: "overview",
                title: "AIPS 프로젝트 개요",
                description: "AI 기반 생산성 시스템 - Radix UI + AI 모듈",
                tool_name: "get_aips_overview",
                template: OVERVIEW,
            },
            TopicDefinition {
                topic: "ai-features",
                title: "AIPS AI 기능",
                description: "AI 통합, 정보 처리, 생산성 향상",
                tool_name: "get_aips_ai_features",
                template: AI_FEATURES,
            },
        ]
    }
}

const OVERVIEW: &str = r#"# 🤖 AIPS 프로젝트 개요

## 📋 **프로젝트 설명**
AIPS(AI-Powered Information Processing System)는 인공지능을 활용하여 정보 처리 및 생산성 향상을 목표로 하는 현대적인 웹 애플리케이션입니다.

## 🏗️ **기술 스택**
- **Frontend**: React 18.3.1 + TypeScript 5.7.2
- **UI Framework**: Radix UI + Tailwind CSS
- **AI Integration**: AI 모듈 및 머신러닝 알고리즘
- **Charts**: ECharts (데이터 시각화 최적화)
- **Editor**: Flora Editor (리치 텍스트 편집)
- **Build Tool**: Vite 6.2.0
- **Package Manager**: pnpm

## 📊 **현재 상태**
- **완성도**: 🟡 70%
- **주요 기능**: AI 분석, 데이터 처리, 생산성 도구
- **특화 영역**: AI 기반 정보 처리 및 분석

## 🎯 **주요 특징**
- **AI Integration**: 머신러닝 모델 통합
- **Information Processing**: 대용량 데이터 처리
- **Productivity Tools**: 작업 자동화 및 최적화
- **Advanced Analytics**: 예측 분석 및 인사이트
"#;

const AI_FEATURES: &str = r#"# 🤖 AIPS AI 기능

## 🧠 **AI 통합**
- **머신러닝 모델**: 예측 분석 및 패턴 인식
- **자연어 처리**: 텍스트 분석 및 요약
- **이미지 인식**: 컴퓨터 비전 및 이미지 처리
- **음성 인식**: 음성-텍스트 변환

## 📊 **정보 처리**
- **대용량 데이터**: 효율적인 데이터 처리 및 분석
- **실시간 처리**: 스트리밍 데이터 분석
- **데이터 품질**: 자동 데이터 검증 및 정제
- **메타데이터 관리**: 데이터 카탈로그 및 거버넌스

## 🚀 **생산성 향상**
- **작업 자동화**: 반복 작업 자동화
- **스마트 추천**: AI 기반 추천 시스템
- **예측 분석**: 트렌드 예측 및 리스크 분석
- **인사이트 생성**: 데이터 기반 의사결정 지원

## 🛠️ **개발 도구**
- **AI 모듈**: 재사용 가능한 AI 컴포넌트
- **API 통합**: 외부 AI 서비스 연동
- **모델 관리**: AI 모델 버전 관리 및 배포
- **성능 모니터링**: AI 모델 성능 추적
"#;
